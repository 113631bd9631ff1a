//! Display backend trait definition.
//!
//! The engine never calls platform APIs directly. Window creation, event
//! pumping, raw input snapshots, and presentation all go through
//! [`DisplayBackend`].

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::input::{Key, MouseButton};

/// One frame's raw input snapshot as polled from a backend.
///
/// Every flag means "currently held", with no edge information; the engine's
/// input tracker derives pressed/released from consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInput {
    /// The platform asked the application to close.
    pub quit: bool,
    pub keys: [bool; Key::COUNT],
    pub mouse_buttons: [bool; MouseButton::COUNT],
    /// Cursor position in physical window pixels.
    pub mouse_x: i32,
    pub mouse_y: i32,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            quit: false,
            keys: [false; Key::COUNT],
            mouse_buttons: [false; MouseButton::COUNT],
            mouse_x: 0,
            mouse_y: 0,
        }
    }
}

impl RawInput {
    pub fn with_key(mut self, key: Key, held: bool) -> Self {
        self.keys[key.index()] = held;
        self
    }

    pub fn with_mouse_button(mut self, button: MouseButton, held: bool) -> Self {
        self.mouse_buttons[button.index()] = held;
        self
    }

    pub fn with_mouse(mut self, x: i32, y: i32) -> Self {
        self.mouse_x = x;
        self.mouse_y = y;
        self
    }

    pub fn with_quit(mut self) -> Self {
        self.quit = true;
        self
    }

    pub fn key(&self, key: Key) -> bool {
        self.keys[key.index()]
    }

    pub fn mouse_button(&self, button: MouseButton) -> bool {
        self.mouse_buttons[button.index()]
    }
}

/// Presentation and raw input backend.
///
/// Two implementations exist: SDL2 for the desktop and an in-memory
/// headless backend for tests and offline rendering.
pub trait DisplayBackend {
    /// Create the display surface for a `width` x `height` physical buffer.
    /// Failure here is an initialization failure: no frame will run.
    fn init(&mut self, title: &str, width: u32, height: u32) -> Result<()>;

    /// Drain pending platform events and snapshot the current input state.
    fn poll_input(&mut self) -> RawInput;

    /// Upload `buffer` and show it.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<()>;

    /// Release backend resources. Must tolerate a partially initialized
    /// backend and repeated calls.
    fn shutdown(&mut self) -> Result<()>;
}

impl<B: DisplayBackend + ?Sized> DisplayBackend for Box<B> {
    fn init(&mut self, title: &str, width: u32, height: u32) -> Result<()> {
        (**self).init(title, width, height)
    }

    fn poll_input(&mut self) -> RawInput {
        (**self).poll_input()
    }

    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        (**self).present(buffer)
    }

    fn shutdown(&mut self) -> Result<()> {
        (**self).shutdown()
    }
}
