//! Synthetic terrain shared by the integration tests.

#![allow(dead_code)]

use voxel_engine::TerrainMap;

pub const SIZE: u32 = 256;

/// Rolling hills: altitude from two sine waves, color encodes the cell so a
/// pixel can be traced back to the terrain it came from.
pub fn hills_rgba() -> (Vec<u8>, Vec<u8>) {
    let mut color = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    let mut height = Vec::with_capacity((SIZE * SIZE * 4) as usize);

    for y in 0..SIZE {
        for x in 0..SIZE {
            let fx = x as f64 * std::f64::consts::TAU / SIZE as f64;
            let fy = y as f64 * std::f64::consts::TAU / SIZE as f64;
            let alt = 120.0 + 60.0 * (fx * 3.0).sin() + 50.0 * (fy * 2.0).cos();
            let alt = alt.clamp(0.0, 255.0) as u8;

            color.extend_from_slice(&[x as u8, y as u8, alt, 255]);
            height.extend_from_slice(&[alt, alt, alt, 255]);
        }
    }
    (color, height)
}

pub fn hills() -> TerrainMap {
    let (color, height) = hills_rgba();
    TerrainMap::load(&color, &height, SIZE, SIZE).unwrap()
}

/// xorshift32 for reproducible input scripts.
pub fn rand(rng: &mut u32) -> f64 {
    *rng ^= *rng << 13;
    *rng ^= *rng >> 17;
    *rng ^= *rng << 5;
    (*rng >> 8) as f64 * (1.0 / 16777216.0)
}
