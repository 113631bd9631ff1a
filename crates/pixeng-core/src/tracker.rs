//! Per-frame input edge detection.

use crate::backend::RawInput;
use crate::error::Result;
use crate::input::{Key, KeyState, MouseButton};

/// Edge state for every tracked key and mouse button, plus the cursor.
///
/// Updated exactly once per frame from a [`RawInput`] snapshot; reads are
/// pure lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputTracker {
    keys: [KeyState; Key::COUNT],
    mouse: [KeyState; MouseButton::COUNT],
    mouse_x: i32,
    mouse_y: i32,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTracker {
    pub fn new() -> Self {
        Self {
            keys: [KeyState::default(); Key::COUNT],
            mouse: [KeyState::default(); MouseButton::COUNT],
            mouse_x: 0,
            mouse_y: 0,
        }
    }

    /// Advance every input by one frame. Keys and mouse buttons share the
    /// same transition rule.
    pub fn update(&mut self, raw: &RawInput) {
        for (state, &held) in self.keys.iter_mut().zip(&raw.keys) {
            *state = state.next(held);
        }
        for (state, &held) in self.mouse.iter_mut().zip(&raw.mouse_buttons) {
            *state = state.next(held);
        }
        self.mouse_x = raw.mouse_x;
        self.mouse_y = raw.mouse_y;
    }

    pub fn key_state(&self, key: Key) -> KeyState {
        self.keys[key.index()]
    }

    /// Look up a key by raw scancode. Scancodes that do not name a tracked
    /// key are an error rather than being clamped.
    pub fn key_state_by_scancode(&self, scancode: u32) -> Result<KeyState> {
        Key::try_from(scancode).map(|key| self.key_state(key))
    }

    pub fn mouse_state(&self, button: MouseButton) -> KeyState {
        self.mouse[button.index()]
    }

    /// Look up a mouse button by backend number (1-based).
    pub fn mouse_state_by_number(&self, number: u8) -> Result<KeyState> {
        MouseButton::try_from(number).map(|button| self.mouse_state(button))
    }

    pub fn mouse_x(&self) -> i32 {
        self.mouse_x
    }

    pub fn mouse_y(&self) -> i32 {
        self.mouse_y
    }
}
