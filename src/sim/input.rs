// input.rs - Keyboard and pointer intent
//
// Intent magnitudes, not raw events. The host forwards DOM key codes and
// pointer positions; the camera only ever sees the resulting Input.

use crate::scene::DEFAULT_HORIZON;

const WALK: f64 = 3.0;
const CLIMB: f64 = 2.0;

/// Horizon pixels per viewport height of vertical drag.
const DRAG_LOOK: f64 = 500.0;
/// Climb intent per viewport height of vertical drag.
const DRAG_CLIMB: f64 = 10.0;
/// Turn intent per viewport width of horizontal drag.
const DRAG_TURN: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Input {
    /// +3 forward, -3 backward
    pub forward_back: f64,
    /// Positive turns left
    pub left_right: f64,
    /// Positive climbs
    pub up_down: f64,
    pub look_up: bool,
    pub look_down: bool,
    /// Where the active pointer drag started
    pub anchor: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Forward,
    Back,
    Up,
    Down,
    LookUp,
    LookDown,
}

impl Key {
    /// Map a DOM `keyCode`: arrows, WASD, R/F to climb, E/Q to look.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            37 | 65 => Some(Key::Left),
            39 | 68 => Some(Key::Right),
            38 | 87 => Some(Key::Forward),
            40 | 83 => Some(Key::Back),
            82 => Some(Key::Up),
            70 => Some(Key::Down),
            69 => Some(Key::LookUp),
            81 => Some(Key::LookDown),
            _ => None,
        }
    }
}

impl Input {
    /// Any intent currently held.
    pub fn is_active(&self) -> bool {
        self.forward_back != 0.0
            || self.left_right != 0.0
            || self.up_down != 0.0
            || self.look_up
            || self.look_down
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.left_right = 1.0,
            Key::Right => self.left_right = -1.0,
            Key::Forward => self.forward_back = WALK,
            Key::Back => self.forward_back = -WALK,
            Key::Up => self.up_down = CLIMB,
            Key::Down => self.up_down = -CLIMB,
            Key::LookUp => self.look_up = true,
            Key::LookDown => self.look_down = true,
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left | Key::Right => self.left_right = 0.0,
            Key::Forward | Key::Back => self.forward_back = 0.0,
            Key::Up | Key::Down => self.up_down = 0.0,
            Key::LookUp => self.look_up = false,
            Key::LookDown => self.look_down = false,
        }
    }

    /// Start a drag: fly forward and remember where the pointer went down.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.forward_back = WALK;
        self.anchor = Some((x, y));
    }

    /// Steer by the offset from the drag anchor.
    ///
    /// Returns the horizon row the camera should snap to, or `None` when no
    /// drag is in progress.
    pub fn pointer_move(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> Option<f64> {
        let (ax, ay) = self.anchor?;
        if self.forward_back == 0.0 {
            return None;
        }

        let dy = (ay - y) / viewport_h;
        self.left_right = (ax - x) / viewport_w * DRAG_TURN;
        self.up_down = dy * DRAG_CLIMB;
        Some(DEFAULT_HORIZON + dy * DRAG_LOOK)
    }

    pub fn pointer_up(&mut self) {
        self.anchor = None;
        self.forward_back = 0.0;
        self.left_right = 0.0;
        self.up_down = 0.0;
    }
}
