// error.rs - Error types
//
// Load failures are fatal to startup: a session never renders from a
// partially loaded map. Resize failures reject degenerate screens before
// the render pass, whose loops assume at least one column.

use thiserror::Error;

/// Errors raised while building a terrain map from decoded rasters.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("map must be square, got {width}x{height}")]
    NotSquare { width: u32, height: u32 },

    #[error("map size {0} is not a power of two")]
    NotPowerOfTwo(u32),

    #[error("{map} buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        map: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("color map is {color_w}x{color_h} but height map is {height_w}x{height_h}")]
    DimensionMismatch {
        color_w: u32,
        color_h: u32,
        height_w: u32,
        height_h: u32,
    },

    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
}

/// Rejected screen geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResizeError {
    #[error("screen size {width}x{height} has no pixels")]
    ZeroSize { width: u32, height: u32 },
}

/// Errors surfaced by a running session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terrain map has not been loaded")]
    MapNotLoaded,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Resize(#[from] ResizeError),

    #[error("presenting frame to {target} failed")]
    Present {
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
