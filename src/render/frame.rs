// frame.rs - Output raster
//
// Pixels are packed u32: alpha in the high byte, then blue, green, red.
// On a little-endian host the byte view is R,G,B,A, which a canvas
// ImageData accepts as-is.

use crate::error::ResizeError;
use crate::scene::MAX_VIEWPORT_WIDTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, ResizeError> {
        check(width, height)?;
        Ok(Self {
            pixels: vec![0; (width as usize) * (height as usize)],
            width,
            height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ResizeError> {
        check(width, height)?;
        self.width = width;
        self.height = height;
        self.pixels.resize((width as usize) * (height as usize), 0);
        Ok(())
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Paint rows `top..bottom` of one column.
    ///
    /// `top` is clamped to the first row and `bottom` to the frame height;
    /// an empty or inverted range and an off-frame column draw nothing.
    #[inline]
    pub fn draw_span(&mut self, column: i32, top: i32, bottom: i32, color: u32) {
        if column < 0 || column >= self.width as i32 {
            return;
        }
        let top = top.max(0);
        let bottom = bottom.min(self.height as i32);
        if top >= bottom {
            return;
        }

        let w = self.width as usize;
        let mut offset = top as usize * w + column as usize;
        for _ in top..bottom {
            self.pixels[offset] = color;
            offset += w;
        }
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    pub fn pixels(&self) -> &[u32] { &self.pixels }
    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn ptr(&self) -> *const u8 {
        self.pixels.as_ptr() as *const u8
    }

    /// Length of the byte view behind `ptr`.
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 4
    }

    /// Borrowed byte view over the pixels: the same memory as `ptr`,
    /// `byte_len` bytes long. R,G,B,A per pixel on little-endian hosts.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u8 has alignment 1 and the u32 allocation spans exactly
        // byte_len() initialized bytes, borrowed for the lifetime of &self.
        unsafe { std::slice::from_raw_parts(self.ptr(), self.byte_len()) }
    }

    /// R,G,B,A bytes per pixel, independent of host endianness.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }
}

fn check(width: u32, height: u32) -> Result<(), ResizeError> {
    if width == 0 || height == 0 {
        tracing::warn!(width, height, "rejected empty frame");
        return Err(ResizeError::ZeroSize { width, height });
    }
    Ok(())
}

/// Frame size derived from the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Cap the width at MAX_VIEWPORT_WIDTH and keep the window's aspect.
    pub fn fit(inner_w: u32, inner_h: u32) -> Result<Self, ResizeError> {
        if inner_w == 0 || inner_h == 0 {
            return Err(ResizeError::ZeroSize { width: inner_w, height: inner_h });
        }
        let aspect = inner_w as f64 / inner_h as f64;
        let width = inner_w.min(MAX_VIEWPORT_WIDTH);
        let height = (width as f64 / aspect).floor() as u32;
        check(width, height)?;
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_frames() {
        assert_eq!(FrameBuffer::new(0, 10), Err(ResizeError::ZeroSize { width: 0, height: 10 }));
        assert!(FrameBuffer::new(10, 0).is_err());

        let mut fb = FrameBuffer::new(4, 4).unwrap();
        assert!(fb.resize(0, 4).is_err());
        assert_eq!((fb.width(), fb.height()), (4, 4));
    }

    #[test]
    fn span_writes_half_open_range() {
        let mut fb = FrameBuffer::new(3, 5).unwrap();
        fb.draw_span(1, 1, 4, 7);

        for y in 0..5 {
            for x in 0..3 {
                let want = if x == 1 && (1..4).contains(&y) { 7 } else { 0 };
                assert_eq!(fb.pixel(x, y), want, "({x}, {y})");
            }
        }
    }

    #[test]
    fn span_clamps_to_frame() {
        let mut fb = FrameBuffer::new(2, 4).unwrap();
        fb.draw_span(0, -10, 100, 9);
        assert!((0..4).all(|y| fb.pixel(0, y) == 9));
        assert!((0..4).all(|y| fb.pixel(1, y) == 0));

        fb.draw_span(-1, 0, 4, 5);
        fb.draw_span(2, 0, 4, 5);
        assert!(!fb.pixels().contains(&5));
    }

    #[test]
    fn inverted_span_is_noop() {
        let mut fb = FrameBuffer::new(2, 4).unwrap();
        fb.draw_span(0, 3, 1, 9);
        fb.draw_span(0, 2, 2, 9);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn byte_view_is_rgba() {
        let mut fb = FrameBuffer::new(1, 1).unwrap();
        fb.fill(0xff33_2211);
        assert_eq!(fb.to_rgba_bytes(), vec![0x11, 0x22, 0x33, 0xff]);
        assert_eq!(fb.byte_len(), 4);
    }

    #[test]
    fn borrowed_bytes_cover_the_pixel_buffer() {
        let mut fb = FrameBuffer::new(3, 2).unwrap();
        fb.fill(0xff00_0000);
        fb.draw_span(1, 0, 2, 0xff33_2211);

        let bytes = fb.as_bytes();
        assert_eq!(bytes.len(), fb.byte_len());
        assert_eq!(bytes.as_ptr(), fb.ptr());
        if cfg!(target_endian = "little") {
            assert_eq!(bytes, fb.to_rgba_bytes().as_slice());
            assert_eq!(&bytes[4..8], &[0x11, 0x22, 0x33, 0xff]);
        }
    }

    #[test]
    fn viewport_caps_width_and_keeps_aspect() {
        assert_eq!(Viewport::fit(1600, 800).unwrap(), Viewport { width: 800, height: 400 });
        assert_eq!(Viewport::fit(512, 512).unwrap(), Viewport { width: 512, height: 512 });
        assert!(Viewport::fit(0, 480).is_err());
        // so wide that the capped height rounds to nothing
        assert!(Viewport::fit(10_000, 1).is_err());
    }
}
