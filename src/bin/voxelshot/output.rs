// output.rs - PNG presenter
//
// Keeps overwriting one file, so the image on disk is always the most
// recently presented frame.

use std::path::PathBuf;

use voxel_engine::present::Present;
use voxel_engine::{FrameBuffer, SessionError};

pub struct PngSink {
    path: PathBuf,
    pub presented: u64,
}

impl PngSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path, presented: 0 }
    }
}

impl PngSink {
    fn error(&self, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> SessionError {
        SessionError::Present { target: self.path.display().to_string(), source: source.into() }
    }
}

impl Present for PngSink {
    fn present(&mut self, frame: &FrameBuffer, overlay: &str) -> Result<(), SessionError> {
        let img = image::RgbaImage::from_raw(frame.width(), frame.height(), frame.to_rgba_bytes())
            .ok_or_else(|| self.error("frame size does not match pixel count"))?;
        img.save(&self.path).map_err(|e| self.error(e))?;

        self.presented += 1;
        tracing::debug!(frame = self.presented, overlay, "frame written");
        Ok(())
    }
}
