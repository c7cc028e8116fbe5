// sim/ - Flight simulation
//
// Camera state, input intent, and the session that ties one frame
// together: advance the camera, render, record frame time.

mod camera;
mod fps;
mod input;

pub use camera::Camera;
pub use fps::{FpsMeter, FPS_WINDOW};
pub use input::{Input, Key};

use crate::error::{LoadError, ResizeError, SessionError};
use crate::render::{FrameBuffer, Renderer, Viewport};
use crate::world::TerrainMap;

/// One running view: owns the map, camera, input and output frame.
pub struct Session {
    map: Option<TerrainMap>,
    camera: Camera,
    input: Input,
    renderer: Renderer,
    frame: FrameBuffer,
    fps: FpsMeter,
    last_ms: Option<f64>,
}

impl Session {
    pub fn new(width: u32, height: u32) -> Result<Self, ResizeError> {
        Ok(Self {
            map: None,
            camera: Camera::default(),
            input: Input::default(),
            renderer: Renderer::new(),
            frame: FrameBuffer::new(width, height)?,
            fps: FpsMeter::new(),
            last_ms: None,
        })
    }

    /// Install the terrain. Ticking is refused until this happens.
    pub fn load_map(&mut self, map: TerrainMap) {
        tracing::debug!(size = map.width(), "session map installed");
        self.camera.collide(&map);
        self.map = Some(map);
    }

    /// Build the terrain from decoded RGBA rasters and install it.
    pub fn load_rgba(&mut self, color: &[u8], height: &[u8], width: u32, map_height: u32) -> Result<(), LoadError> {
        let map = TerrainMap::load(color, height, width, map_height)?;
        self.load_map(map);
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ResizeError> {
        self.frame.resize(width, height)?;
        tracing::debug!(width, height, "frame resized");
        Ok(())
    }

    /// Size the frame from the host window (width capped, aspect kept).
    pub fn fit_window(&mut self, inner_w: u32, inner_h: u32) -> Result<Viewport, ResizeError> {
        let vp = Viewport::fit(inner_w, inner_h)?;
        if (vp.width, vp.height) != (self.frame.width(), self.frame.height()) {
            self.resize(vp.width, vp.height)?;
        }
        Ok(vp)
    }

    /// Returns false for keys that don't steer.
    pub fn key_down(&mut self, code: u32) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.input.press(key);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: u32) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.input.release(key);
                true
            }
            None => false,
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.input.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) {
        if let Some(horizon) = self.input.pointer_move(x, y, viewport_w, viewport_h) {
            self.camera.horizon = horizon;
        }
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up();
    }

    /// Advance the camera to `now_ms` and render a frame.
    pub fn tick(&mut self, now_ms: f64) -> Result<&FrameBuffer, SessionError> {
        let map = self.map.as_ref().ok_or(SessionError::MapNotLoaded)?;

        let elapsed = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        self.camera.advance(&self.input, elapsed, map);
        self.renderer.render(&self.camera, map, &mut self.frame);
        self.fps.record(now_ms);

        Ok(&self.frame)
    }

    pub fn camera(&self) -> &Camera { &self.camera }
    pub fn camera_mut(&mut self) -> &mut Camera { &mut self.camera }
    pub fn input(&self) -> &Input { &self.input }
    pub fn input_mut(&mut self) -> &mut Input { &mut self.input }
    pub fn map(&self) -> Option<&TerrainMap> { self.map.as_ref() }
    pub fn frame(&self) -> &FrameBuffer { &self.frame }
    pub fn renderer(&self) -> &Renderer { &self.renderer }
    pub fn fps(&self) -> u32 { self.fps.average() }
    pub fn is_active(&self) -> bool { self.input.is_active() }

    pub fn overlay_text(&self) -> String {
        self.fps.overlay_text(self.frame.width(), self.frame.height())
    }
}
