// render/ - Voxel-space scene renderer
//
// Marches z outward from the camera. At each z a horizontal line across a
// 90 degree field of view is sampled once per screen column and projected.
// Each column keeps an occlusion horizon (hidden_y): the topmost row already
// painted by nearer terrain. A farther sample only paints the rows between
// its own projected top and that horizon, so nearer terrain always wins and
// no row is painted twice in a frame.
//
// The z step grows by DZ_GROWTH after every step. Far away a screen pixel
// covers more ground, so coarser sampling there costs little and bounds the
// step count to roughly sqrt(distance).

mod column;
mod frame;

pub use column::*;
pub use frame::*;

use crate::error::ResizeError;
use crate::scene::BACKGROUND;
use crate::sim::Camera;
use crate::world::TerrainMap;

/// Increase of the z step after every step.
pub const DZ_GROWTH: f64 = 0.005;

/// Distances sampled for one frame: 1, 2, 3.005, 4.015, ... below `distance`.
/// A NaN or infinite `distance` yields nothing.
#[derive(Debug, Clone)]
pub struct DepthSteps {
    z: f64,
    dz: f64,
    distance: f64,
}

pub fn depth_steps(distance: f64) -> DepthSteps {
    DepthSteps { z: 1.0, dz: 1.0, distance }
}

impl Iterator for DepthSteps {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if !self.distance.is_finite() || self.z >= self.distance {
            return None;
        }
        let z = self.z;
        self.z += self.dz;
        self.dz += DZ_GROWTH;
        Some(z)
    }
}

/// One painted run of rows: `top..bottom` in `column`, sampled at `z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub column: u32,
    pub z: f64,
    pub top: i32,
    pub bottom: i32,
    pub color: u32,
}

/// Reusable per-frame state. Keep one per frame size to avoid reallocating
/// the occlusion horizon every frame.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    hidden_y: Vec<i32>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occlusion horizon per column after the last rendered frame.
    pub fn hidden_y(&self) -> &[i32] {
        &self.hidden_y
    }

    /// Render the terrain seen from `camera` into `frame`.
    pub fn render(&mut self, camera: &Camera, map: &TerrainMap, frame: &mut FrameBuffer) {
        self.render_traced(camera, map, frame, |_| {});
    }

    /// Like `render`, reporting every span actually painted, in paint order.
    pub fn render_traced<F: FnMut(Span)>(
        &mut self,
        camera: &Camera,
        map: &TerrainMap,
        frame: &mut FrameBuffer,
        mut on_span: F,
    ) {
        let screen_w = frame.width();
        let screen_h = frame.height() as i32;

        frame.fill(BACKGROUND);
        self.hidden_y.clear();
        self.hidden_y.resize(screen_w as usize, screen_h);

        let sin = camera.angle.sin();
        let cos = camera.angle.cos();
        let columns = screen_w as f64;

        for z in depth_steps(camera.distance) {
            // left and right ends of the view line at distance z
            let mut pl_x = -cos * z - sin * z;
            let mut pl_y = sin * z - cos * z;
            let pr_x = cos * z - sin * z;
            let pr_y = -sin * z - cos * z;
            let dx = (pr_x - pl_x) / columns;
            let dy = (pr_y - pl_y) / columns;
            pl_x += camera.x;
            pl_y += camera.y;

            let scale = projection_scale(z);

            for (i, hidden) in self.hidden_y.iter_mut().enumerate() {
                let (altitude, color) = map.sample(pl_x, pl_y);
                let screen_y = project(camera, altitude, scale);

                let top = screen_y.max(0);
                if top < *hidden {
                    frame.draw_span(i as i32, top, *hidden, color);
                    on_span(Span { column: i as u32, z, top, bottom: *hidden, color });
                }
                if screen_y < *hidden {
                    *hidden = screen_y;
                }

                pl_x += dx;
                pl_y += dy;
            }
        }
    }
}

/// Render one frame into a fresh buffer.
pub fn render_frame(camera: &Camera, map: &TerrainMap, width: u32, height: u32) -> Result<FrameBuffer, ResizeError> {
    let mut frame = FrameBuffer::new(width, height)?;
    Renderer::new().render(camera, map, &mut frame);
    Ok(frame)
}
