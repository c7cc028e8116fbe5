// voxel-engine - Voxel-space terrain renderer
//
// A height map and a color map are ray-marched column by column into a
// packed RGBA frame. The browser host decodes the map images, forwards
// input events and blits the frame; everything in between lives here.
//
//   world/   terrain map, toroidal addressing
//   sim/     camera, input intent, session
//   render/  scene renderer, column projection, frame buffer
//   scene/   defaults of the shipped scene

use wasm_bindgen::prelude::*;

pub mod error;
pub mod render;
pub mod scene;
pub mod sim;
pub mod world;

#[cfg(not(target_arch = "wasm32"))]
pub mod present;

pub use error::{LoadError, ResizeError, SessionError};
pub use render::{render_frame, FrameBuffer, Renderer};
pub use sim::{Camera, Input, Session};
pub use world::TerrainMap;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct VoxelWorld {
    session: Session,
}

#[wasm_bindgen]
impl VoxelWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Result<VoxelWorld, JsValue> {
        let session = Session::new(w, h).map_err(js_err)?;
        Ok(Self { session })
    }

    /// Install the maps from two `ImageData.data` arrays of `map_w x map_h`.
    pub fn load_maps(
        &mut self,
        color: &js_sys::Uint8ClampedArray,
        height: &js_sys::Uint8ClampedArray,
        map_w: u32,
        map_h: u32,
    ) -> Result<(), JsValue> {
        self.session
            .load_rgba(&color.to_vec(), &height.to_vec(), map_w, map_h)
            .map_err(js_err)
    }

    /// Fit the frame to the window: width capped, aspect kept.
    pub fn resize(&mut self, inner_w: u32, inner_h: u32) -> Result<(), JsValue> {
        self.session.fit_window(inner_w, inner_h).map(|_| ()).map_err(js_err)
    }

    pub fn key_down(&mut self, key_code: u32) -> bool { self.session.key_down(key_code) }
    pub fn key_up(&mut self, key_code: u32) -> bool { self.session.key_up(key_code) }

    pub fn pointer_down(&mut self, x: f64, y: f64) { self.session.pointer_down(x, y) }
    pub fn pointer_up(&mut self) { self.session.pointer_up() }

    pub fn pointer_move(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) {
        self.session.pointer_move(x, y, viewport_w, viewport_h)
    }

    pub fn tick(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.session.tick(now_ms).map(|_| ()).map_err(js_err)
    }

    /// Tick at the current wall-clock time.
    pub fn tick_now(&mut self) -> Result<(), JsValue> {
        self.tick(js_sys::Date::now())
    }

    // Accessors for JS
    pub fn output_ptr(&self) -> *const u8 { self.session.frame().ptr() }
    pub fn output_len(&self) -> usize { self.session.frame().byte_len() }
    pub fn width(&self) -> u32 { self.session.frame().width() }
    pub fn height(&self) -> u32 { self.session.frame().height() }
    pub fn fps(&self) -> u32 { self.session.fps() }
    pub fn overlay_text(&self) -> String { self.session.overlay_text() }
    pub fn is_active(&self) -> bool { self.session.is_active() }
}
