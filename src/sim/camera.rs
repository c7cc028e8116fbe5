// camera.rs - Viewpoint state and motion
//
// All motion scales with elapsed milliseconds times SPEED, so the flight
// feels the same at any frame rate. Yaw is applied before translation:
// the camera moves along the heading it has at the end of the step.

use super::Input;
use crate::scene::COLLISION_CLEARANCE;
use crate::world::TerrainMap;

/// World units per millisecond per unit of intent.
const SPEED: f64 = 0.03;

/// Radians per millisecond per unit of turn intent, before SPEED.
const TURN_RATE: f64 = 0.1;

/// Horizon pixels per millisecond while looking up or down, before SPEED.
const LOOK_RATE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    /// Elevation above the zero-altitude plane
    pub height: f64,
    /// Facing direction in radians
    pub angle: f64,
    /// Screen row of the horizon
    pub horizon: f64,
    /// Far clip in world units
    pub distance: f64,
}

impl Default for Camera {
    fn default() -> Self {
        crate::scene::DEFAULT_CAMERA
    }
}

impl Camera {
    /// Apply one step of input, then keep the camera above the terrain.
    pub fn advance(&mut self, input: &Input, elapsed_ms: f64, map: &TerrainMap) {
        let step = elapsed_ms * SPEED;

        if input.left_right != 0.0 {
            self.angle += input.left_right * TURN_RATE * step;
        }
        if input.forward_back != 0.0 {
            self.x -= input.forward_back * self.angle.sin() * step;
            self.y -= input.forward_back * self.angle.cos() * step;
        }
        if input.up_down != 0.0 {
            self.height += input.up_down * step;
        }
        if input.look_up {
            self.horizon += LOOK_RATE * step;
        }
        if input.look_down {
            self.horizon -= LOOK_RATE * step;
        }

        self.collide(map);
    }

    /// Don't fly below the surface.
    pub fn collide(&mut self, map: &TerrainMap) {
        let floor = self.floor(map);
        if floor > self.height {
            self.height = floor;
        }
    }

    /// Lowest allowed height at the current position.
    #[inline]
    pub fn floor(&self, map: &TerrainMap) -> f64 {
        map.altitude_at(self.x, self.y) as f64 + COLLISION_CLEARANCE
    }

    /// Height above the lowest allowed height; never negative after `advance`.
    pub fn ground_clearance(&self, map: &TerrainMap) -> f64 {
        self.height - self.floor(map)
    }
}
