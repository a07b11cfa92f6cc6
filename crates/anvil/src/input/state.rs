//! Level and edge input state.
//!
//! `down` is a level and persists across frames. `pressed` and `released`
//! are edges: set by the event that caused them and cleared at frame end.

use glam::Vec2;
use crate::input::queue::{InputEvent, MouseButton};

/// Size of the key table. Codes at or past this are ignored.
pub const KEY_COUNT: usize = 512;

/// Host key codes the game binds.
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const A: u32 = 65;
    pub const B: u32 = 66;
    pub const D: u32 = 68;
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonState {
    down: bool,
    pressed: bool,
    released: bool,
}

impl ButtonState {
    fn press(&mut self) {
        if !self.down {
            self.pressed = true;
        }
        self.down = true;
    }

    fn release(&mut self) {
        if self.down {
            self.released = true;
        }
        self.down = false;
    }

    fn clear_edges(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}

#[derive(Debug, Clone)]
pub struct InputState {
    keys: Box<[ButtonState; KEY_COUNT]>,
    mouse: [ButtonState; MouseButton::COUNT],
    /// Last pointer position in window pixels.
    pub mouse_pos: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: Box::new([ButtonState::default(); KEY_COUNT]),
            mouse: [ButtonState::default(); MouseButton::COUNT],
            mouse_pos: Vec2::ZERO,
        }
    }

    /// Fold one event into the state. Scroll is not tracked here.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                if let Some(key) = self.key_mut(key_code) {
                    key.press();
                }
            }
            InputEvent::KeyUp { key_code } => {
                if let Some(key) = self.key_mut(key_code) {
                    key.release();
                }
            }
            InputEvent::MouseDown { button } => self.mouse[button.index()].press(),
            InputEvent::MouseUp { button } => self.mouse[button.index()].release(),
            InputEvent::MouseMove { x, y } => self.mouse_pos = Vec2::new(x, y),
            InputEvent::Scroll { .. } => {}
        }
    }

    fn key_mut(&mut self, key_code: u32) -> Option<&mut ButtonState> {
        let key = self.keys.get_mut(key_code as usize);
        if key.is_none() {
            log::debug!("ignoring key code {key_code} outside the key table");
        }
        key
    }

    fn key(&self, key_code: u32) -> ButtonState {
        self.keys.get(key_code as usize).copied().unwrap_or_default()
    }

    pub fn key_down(&self, key_code: u32) -> bool {
        self.key(key_code).down
    }

    pub fn key_pressed(&self, key_code: u32) -> bool {
        self.key(key_code).pressed
    }

    pub fn key_released(&self, key_code: u32) -> bool {
        self.key(key_code).released
    }

    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse[button.index()].down
    }

    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse[button.index()].pressed
    }

    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse[button.index()].released
    }

    /// Drop pressed/released edges. Levels persist.
    pub fn clear_edges(&mut self) {
        self.keys.iter_mut().for_each(ButtonState::clear_edges);
        self.mouse.iter_mut().for_each(ButtonState::clear_edges);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
