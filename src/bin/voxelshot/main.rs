// voxelshot - Render a voxel-space flight to PNG
//
// Pipeline:
//   1. Decode color + height maps (or build a flat one)
//   2. Place the camera, hold the requested intents
//   3. Tick the session for N frames (simulated or wall-clock time)
//   4. Write the last frame
//
// Usage: cargo run --bin voxelshot -- --color C1W.png --height D1.png --forward 3 --frames 60

mod args;
mod output;

use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use voxel_engine::present::{run_frames, LoopConfig, Present};
use voxel_engine::{Session, TerrainMap};

use args::Args;
use output::PngSink;

/// Color of the flat synthetic map.
const FLAT_COLOR: u32 = 0xff30_8040;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let map = match (&args.color, &args.height, args.flat) {
        (Some(color), Some(height), _) => TerrainMap::open(color, height)
            .with_context(|| format!("loading {} + {}", color.display(), height.display()))?,
        (_, _, Some(altitude)) => TerrainMap::filled(voxel_engine::scene::MAP_SIZE, altitude, FLAT_COLOR)?,
        _ => anyhow::bail!("either --color/--height or --flat is required"),
    };
    tracing::info!(size = map.width(), "map ready");

    let mut session = Session::new(args.width, args.screen_height).context("creating frame")?;
    let camera = args.camera(*session.camera());
    *session.camera_mut() = camera;
    session.load_map(map);

    let input = session.input_mut();
    input.forward_back = args.forward;
    input.left_right = args.turn;
    input.up_down = args.climb;

    let mut sink = PngSink::new(args.out.clone());

    if args.realtime {
        let stop = AtomicBool::new(false);
        let config = LoopConfig {
            frame_interval: Duration::from_secs_f64(args.frame_ms.max(0.0) / 1000.0),
            max_frames: Some(args.frames),
        };
        run_frames(&mut session, &mut sink, &stop, config)?;
    } else {
        for i in 0..args.frames {
            session.tick(i as f64 * args.frame_ms)?;
        }
        let overlay = session.overlay_text();
        sink.present(session.frame(), &overlay)?;
    }

    let cam = session.camera();
    tracing::info!(
        x = cam.x,
        y = cam.y,
        height = cam.height,
        angle = cam.angle,
        frames = args.frames,
        "flight finished"
    );
    println!("Wrote {} ({})", args.out.display(), session.overlay_text());

    Ok(())
}
