// args.rs - Command-line flags

use std::path::PathBuf;

use clap::Parser;
use voxel_engine::Camera;

#[derive(Parser, Debug)]
#[command(name = "voxelshot")]
#[command(about = "Fly over a voxel-space terrain and save the last frame as PNG", long_about = None)]
#[command(version)]
pub struct Args {
    /// Color map image
    #[arg(long, requires = "height", conflicts_with = "flat")]
    pub color: Option<PathBuf>,

    /// Height map image (first channel is altitude)
    #[arg(long, requires = "color")]
    pub height: Option<PathBuf>,

    /// Use a flat synthetic map of this altitude instead of images
    #[arg(long)]
    pub flat: Option<u8>,

    /// Frame width
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Frame height
    #[arg(long, default_value_t = 450)]
    pub screen_height: u32,

    #[arg(long, allow_negative_numbers = true)]
    pub x: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub y: Option<f64>,
    /// Camera elevation
    #[arg(long, allow_negative_numbers = true)]
    pub altitude: Option<f64>,
    /// Heading in radians
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub horizon: Option<f64>,
    /// Far clip in world units
    #[arg(long, allow_negative_numbers = true)]
    pub distance: Option<f64>,

    /// Forward intent held for the whole flight (-3..3)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub forward: f64,
    /// Turn intent, positive turns left
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub turn: f64,
    /// Climb intent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub climb: f64,

    /// Frames to simulate
    #[arg(long, default_value_t = 1)]
    pub frames: u64,
    /// Simulated milliseconds per frame
    #[arg(long, default_value_t = 16.0)]
    pub frame_ms: f64,
    /// Pace frames on the wall clock instead of simulated time
    #[arg(long)]
    pub realtime: bool,

    /// Output PNG
    #[arg(long, short, default_value = "frame.png")]
    pub out: PathBuf,
}

impl Args {
    /// Apply camera overrides on top of `camera`.
    pub fn camera(&self, mut camera: Camera) -> Camera {
        if let Some(v) = self.x { camera.x = v; }
        if let Some(v) = self.y { camera.y = v; }
        if let Some(v) = self.altitude { camera.height = v; }
        if let Some(v) = self.angle { camera.angle = v; }
        if let Some(v) = self.horizon { camera.horizon = v; }
        if let Some(v) = self.distance { camera.distance = v; }
        camera
    }
}
