// terrain.rs - Height and color map with toroidal addressing
//
// Both grids are square with a power-of-two side, so wrapping is a bitmask
// instead of a modulo. Any real coordinate maps to a valid cell.

use crate::error::LoadError;

#[derive(Debug, Clone)]
pub struct TerrainMap {
    width: u32,
    height: u32,
    shift: u32,
    altitude: Vec<u8>,
    color: Vec<u32>,
}

/// Pack an RGBA source pixel the way the display expects map colors:
/// opaque alpha, then blue, green, red from high to low byte.
#[inline]
pub fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    0xff00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | r as u32
}

impl TerrainMap {
    /// Build a map from two decoded RGBA8 rasters of `width * height` pixels.
    ///
    /// Color comes from the color raster's R, G, B channels; altitude from
    /// the height raster's first channel.
    pub fn load(color_rgba: &[u8], height_rgba: &[u8], width: u32, height: u32) -> Result<Self, LoadError> {
        let shift = check_size(width, height)?;
        let len = (width as usize) * (height as usize);
        check_len("color", color_rgba, len)?;
        check_len("height", height_rgba, len)?;

        let color = color_rgba
            .chunks_exact(4)
            .map(|p| pack_color(p[0], p[1], p[2]))
            .collect();
        let altitude = height_rgba.chunks_exact(4).map(|p| p[0]).collect();

        tracing::debug!(width, height, "terrain map loaded");

        Ok(Self { width, height, shift, altitude, color })
    }

    /// Constant map: every cell has the same altitude and color.
    pub fn filled(size: u32, altitude: u8, color: u32) -> Result<Self, LoadError> {
        let shift = check_size(size, size)?;
        let len = (size as usize) * (size as usize);
        Ok(Self {
            width: size,
            height: size,
            shift,
            altitude: vec![altitude; len],
            color: vec![color; len],
        })
    }

    /// Decode a color and a height image from disk and build the map.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(
        color_path: impl AsRef<std::path::Path>,
        height_path: impl AsRef<std::path::Path>,
    ) -> Result<Self, LoadError> {
        let color = decode(color_path.as_ref())?;
        let height = decode(height_path.as_ref())?;

        if color.dimensions() != height.dimensions() {
            let (color_w, color_h) = color.dimensions();
            let (height_w, height_h) = height.dimensions();
            return Err(LoadError::DimensionMismatch { color_w, color_h, height_w, height_h });
        }

        let (w, h) = color.dimensions();
        Self::load(color.as_raw(), height.as_raw(), w, h)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn shift(&self) -> u32 { self.shift }
    pub fn len(&self) -> usize { self.altitude.len() }
    pub fn is_empty(&self) -> bool { self.altitude.is_empty() }

    /// Linear cell index for a world coordinate, wrapped onto the torus.
    #[inline(always)]
    pub fn offset(&self, x: f64, y: f64) -> usize {
        let wy = wrap(y, self.height);
        let wx = wrap(x, self.width);
        (wy << self.shift) + wx
    }

    /// (altitude, color) under a world coordinate.
    #[inline(always)]
    pub fn sample(&self, x: f64, y: f64) -> (u8, u32) {
        let i = self.offset(x, y);
        (self.altitude[i], self.color[i])
    }

    #[inline]
    pub fn altitude_at(&self, x: f64, y: f64) -> u8 {
        self.altitude[self.offset(x, y)]
    }

    #[inline]
    pub fn color_at(&self, x: f64, y: f64) -> u32 {
        self.color[self.offset(x, y)]
    }

    /// Overwrite one cell while building a map, e.g. stamping features into
    /// a synthetic one. A session takes the map by value and only hands out
    /// `&TerrainMap` afterwards, so an installed map no longer changes.
    pub fn set(&mut self, x: u32, y: u32, altitude: u8, color: u32) {
        let i = self.offset(x as f64, y as f64);
        self.altitude[i] = altitude;
        self.color[i] = color;
    }
}

/// floor(v) & (dim - 1); negative coordinates wrap from the far edge.
#[inline(always)]
fn wrap(v: f64, dim: u32) -> usize {
    (v.floor() as i64 & (dim as i64 - 1)) as usize
}

fn check_size(width: u32, height: u32) -> Result<u32, LoadError> {
    if width != height {
        return Err(LoadError::NotSquare { width, height });
    }
    if !width.is_power_of_two() {
        return Err(LoadError::NotPowerOfTwo(width));
    }
    Ok(width.trailing_zeros())
}

fn check_len(map: &'static str, buf: &[u8], pixels: usize) -> Result<(), LoadError> {
    let expected = pixels * 4;
    if buf.len() != expected {
        return Err(LoadError::BufferSize { map, expected, actual: buf.len() });
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn decode(path: &std::path::Path) -> Result<image::RgbaImage, LoadError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| LoadError::Decode { path: path.display().to_string(), reason: e.to_string() })
}
