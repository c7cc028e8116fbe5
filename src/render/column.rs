// column.rs - One terrain sample projected onto one screen column

use crate::sim::Camera;
use crate::world::TerrainMap;

/// Projection scale at unit distance. Sets the field-of-view feel; it is not
/// derived from screen geometry.
pub const FOCAL_SCALE: f64 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSample {
    /// Screen row of the terrain top. Unclamped: may be negative or below
    /// the bottom of the frame.
    pub screen_y: i32,
    pub color: u32,
}

/// Screen pixels per world unit of height at distance `z` (z >= 1).
#[inline(always)]
pub fn projection_scale(z: f64) -> f64 {
    1.0 / z * FOCAL_SCALE
}

/// Screen row for terrain of `altitude` given a precomputed scale.
#[inline(always)]
pub fn project(camera: &Camera, altitude: u8, scale: f64) -> i32 {
    ((camera.height - altitude as f64) * scale + camera.horizon).floor() as i32
}

/// Sample the map at a ray point `z` units ahead and project it.
#[inline]
pub fn sample_column(camera: &Camera, map: &TerrainMap, z: f64, ray_x: f64, ray_y: f64) -> ColumnSample {
    let (altitude, color) = map.sample(ray_x, ray_y);
    ColumnSample {
        screen_y: project(camera, altitude, projection_scale(z)),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(height: f64, horizon: f64) -> Camera {
        Camera { height, horizon, ..Camera::default() }
    }

    #[test]
    fn flat_ground_projects_below_horizon() {
        let map = TerrainMap::filled(16, 0, 0xff11_2233).unwrap();
        let s = sample_column(&camera(78.0, 100.0), &map, 8.0, 3.0, 4.0);
        // 78 * 30 + 100
        assert_eq!(s.screen_y, 2440);
        assert_eq!(s.color, 0xff11_2233);
    }

    #[test]
    fn terrain_above_camera_projects_above_horizon() {
        let map = TerrainMap::filled(16, 100, 0).unwrap();
        let s = sample_column(&camera(50.0, 20.0), &map, 8.0, 0.0, 0.0);
        // -50 * 30 + 20
        assert_eq!(s.screen_y, -1480);
    }

    #[test]
    fn row_is_floored() {
        let map = TerrainMap::filled(16, 0, 0).unwrap();
        // 1 * 240 / 7 = 34.28...
        assert_eq!(sample_column(&camera(1.0, 0.0), &map, 7.0, 0.0, 0.0).screen_y, 34);
        // -1 * 240 / 7 = -34.28... floors away from zero
        let map = TerrainMap::filled(16, 2, 0).unwrap();
        assert_eq!(sample_column(&camera(1.0, 0.0), &map, 7.0, 0.0, 0.0).screen_y, -35);
    }

    #[test]
    fn scale_shrinks_with_distance() {
        assert_eq!(projection_scale(1.0), 240.0);
        assert_eq!(projection_scale(2.0), 120.0);
        assert!(projection_scale(800.0) < 1.0);
    }
}
