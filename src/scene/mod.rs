// scene/ - Defaults of the shipped scene
//
// The shipped map assets are 1024x1024. The camera starts in the southern
// half of the map, looking north (toward decreasing y).

use crate::sim::Camera;

pub use crate::render::FOCAL_SCALE;

/// Side length of the shipped maps.
pub const MAP_SIZE: u32 = 1024;

/// Sky color, packed like map colors (alpha high, then B, G, R).
pub const BACKGROUND: u32 = 0xffe0_9090;

/// Widest frame the browser host renders.
pub const MAX_VIEWPORT_WIDTH: u32 = 800;

/// Minimum height of the camera above the ground directly beneath it.
pub const COLLISION_CLEARANCE: f64 = 10.0;

/// Horizon row the pointer drag steers around.
pub const DEFAULT_HORIZON: f64 = 100.0;

pub const DEFAULT_CAMERA: Camera = Camera {
    x: 512.0,
    y: 800.0,
    height: 78.0,
    angle: 0.0,
    horizon: DEFAULT_HORIZON,
    distance: 800.0,
};
