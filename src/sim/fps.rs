// fps.rs - Rolling frame rate for the diagnostics overlay

use std::collections::VecDeque;

/// Samples kept in the rolling average.
pub const FPS_WINDOW: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    samples: VecDeque<f64>,
    last_ms: Option<f64>,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self { samples: VecDeque::with_capacity(FPS_WINDOW + 1), last_ms: None }
    }

    /// Record a frame finishing at `now_ms`. The very first frame has no
    /// predecessor and counts as 0 fps.
    pub fn record(&mut self, now_ms: f64) {
        let fps = match self.last_ms {
            Some(last) if now_ms > last => 1000.0 / (now_ms - last),
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);

        self.samples.push_back(fps);
        if self.samples.len() > FPS_WINDOW {
            self.samples.pop_front();
        }
    }

    /// Floored mean of the window.
    pub fn average(&self) -> u32 {
        if self.samples.is_empty() {
            return 0;
        }
        let sum: f64 = self.samples.iter().sum();
        (sum / self.samples.len() as f64).floor() as u32
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// `WIDTHxHEIGHT@FPS`
    pub fn overlay_text(&self, width: u32, height: u32) -> String {
        format!("{}x{}@{}", width, height, self.average())
    }
}
