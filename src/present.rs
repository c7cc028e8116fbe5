// present.rs - Native frame loop
//
// Render, present, wait for the next tick. The stop flag is checked once per
// iteration; a frame in progress always completes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::SessionError;
use crate::render::FrameBuffer;
use crate::sim::Session;

/// Display side of the loop.
pub trait Present {
    fn present(&mut self, frame: &FrameBuffer, overlay: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Target time between frame starts
    pub frame_interval: Duration,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            max_frames: None,
        }
    }
}

/// Drive `session` until `stop` is set or the frame limit is reached.
/// Returns the number of frames presented.
pub fn run_frames<P: Present>(
    session: &mut Session,
    presenter: &mut P,
    stop: &AtomicBool,
    config: LoopConfig,
) -> Result<u64, SessionError> {
    let start = Instant::now();
    let mut frames = 0u64;
    let mut deadline = start;

    tracing::debug!(interval_ms = config.frame_interval.as_millis() as u64, "frame loop started");

    while !stop.load(Ordering::Relaxed) {
        if config.max_frames.is_some_and(|max| frames >= max) {
            break;
        }

        let now_ms = start.elapsed().as_secs_f64() * 1000.0;
        session.tick(now_ms)?;
        let overlay = session.overlay_text();
        presenter.present(session.frame(), &overlay)?;
        frames += 1;

        deadline += config.frame_interval;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        } else {
            // fell behind; don't try to catch up with a burst of frames
            deadline = now;
        }
    }

    tracing::debug!(frames, "frame loop stopped");
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TerrainMap;

    struct Count {
        frames: u64,
        stop_after: u64,
        flag: Option<&'static AtomicBool>,
    }

    impl Present for Count {
        fn present(&mut self, frame: &FrameBuffer, overlay: &str) -> Result<(), SessionError> {
            assert_eq!(frame.width(), 8);
            assert!(overlay.starts_with("8x6@"));
            self.frames += 1;
            if self.frames == self.stop_after {
                if let Some(flag) = self.flag {
                    flag.store(true, Ordering::Relaxed);
                }
            }
            Ok(())
        }
    }

    fn session() -> Session {
        let mut s = Session::new(8, 6).unwrap();
        s.load_map(TerrainMap::filled(16, 0, 0xff00_0000).unwrap());
        s
    }

    fn fast(max_frames: Option<u64>) -> LoopConfig {
        LoopConfig { frame_interval: Duration::from_millis(1), max_frames }
    }

    #[test]
    fn stops_at_frame_limit() {
        let mut p = Count { frames: 0, stop_after: 0, flag: None };
        let stop = AtomicBool::new(false);
        let n = run_frames(&mut session(), &mut p, &stop, fast(Some(3))).unwrap();
        assert_eq!(n, 3);
        assert_eq!(p.frames, 3);
    }

    #[test]
    fn stop_flag_ends_loop() {
        static STOP: AtomicBool = AtomicBool::new(false);
        let mut p = Count { frames: 0, stop_after: 2, flag: Some(&STOP) };
        let n = run_frames(&mut session(), &mut p, &STOP, fast(None)).unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn preset_stop_renders_nothing() {
        let mut p = Count { frames: 0, stop_after: 0, flag: None };
        let stop = AtomicBool::new(true);
        assert_eq!(run_frames(&mut session(), &mut p, &stop, fast(None)).unwrap(), 0);
    }

    #[test]
    fn missing_map_is_an_error() {
        let mut s = Session::new(8, 6).unwrap();
        let mut p = Count { frames: 0, stop_after: 0, flag: None };
        let stop = AtomicBool::new(false);
        assert!(matches!(
            run_frames(&mut s, &mut p, &stop, fast(Some(1))),
            Err(SessionError::MapNotLoaded)
        ));
    }
}
