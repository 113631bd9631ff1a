//! SDL2 backend for pixeng.
//!
//! Implements `DisplayBackend` with an SDL2 window, an accelerated canvas,
//! and one RGB24 streaming texture the size of the physical pixel buffer.
//! Each frame the buffer is uploaded into the texture, stretched over the
//! window, and presented. Input is read as SDL keyboard and mouse state
//! snapshots after draining the event queue.

use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::{EventPump, Sdl, VideoSubsystem};

use pixeng_core::backend::{DisplayBackend, RawInput};
use pixeng_core::buffer::PixelBuffer;
use pixeng_core::error::{PixengError, Result};
use pixeng_core::input::{Key, MouseButton};

/// SDL2 display and input backend.
///
/// # Safety
///
/// `texture` is declared before `texture_creator` so that Rust's drop order
/// (declaration order) destroys the texture before the creator it borrows
/// from, and both before the canvas and the SDL context. The
/// `Texture<'static>` lifetime is erased via transmute in `init()`; this is
/// sound because `shutdown()` also releases them in that order.
pub struct SdlBackend {
    texture: Option<Texture<'static>>,
    texture_creator: Option<TextureCreator<WindowContext>>,
    canvas: Option<Canvas<Window>>,
    event_pump: EventPump,
    video: VideoSubsystem,
    _sdl: Sdl,
    vsync: bool,
}

impl SdlBackend {
    /// Initialize SDL and its video subsystem. The window is created later
    /// by `init`.
    pub fn new() -> Result<Self> {
        let sdl = sdl2::init().map_err(PixengError::Init)?;
        let video = sdl.video().map_err(PixengError::Init)?;
        let event_pump = sdl.event_pump().map_err(PixengError::Init)?;
        log::debug!("SDL2 video driver: {}", video.current_video_driver());

        Ok(Self {
            texture: None,
            texture_creator: None,
            canvas: None,
            event_pump,
            video,
            _sdl: sdl,
            vsync: true,
        })
    }

    /// Whether presentation waits for vertical sync. Takes effect at `init`.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }
}

impl DisplayBackend for SdlBackend {
    fn init(&mut self, title: &str, width: u32, height: u32) -> Result<()> {
        let window = self
            .video
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| PixengError::Init(e.to_string()))?;

        let mut builder = window.into_canvas().accelerated();
        if self.vsync {
            builder = builder.present_vsync();
        }
        let canvas = builder
            .build()
            .map_err(|e| PixengError::Init(e.to_string()))?;
        let texture_creator = canvas.texture_creator();

        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
            .map_err(|e| PixengError::Init(e.to_string()))?;

        // SAFETY: The texture borrows from `texture_creator`, which is stored
        // in the same struct. `texture` is declared (and released in
        // `shutdown`) before `texture_creator`, so the erased lifetime never
        // outlives its creator.
        let texture: Texture<'static> = unsafe { std::mem::transmute(texture) };

        self.texture_creator = Some(texture_creator);
        self.texture = Some(texture);
        self.canvas = Some(canvas);

        log::info!("SDL2 backend initialized: {width}x{height}");
        Ok(())
    }

    fn poll_input(&mut self) -> RawInput {
        let mut raw = RawInput::default();
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                raw.quit = true;
            }
        }

        let keyboard = self.event_pump.keyboard_state();
        for &key in Key::ALL {
            raw.keys[key.index()] = sdl_scancode(key)
                .is_some_and(|scancode| keyboard.is_scancode_pressed(scancode));
        }

        let mouse = self.event_pump.mouse_state();
        for button in MouseButton::ALL {
            raw.mouse_buttons[button.index()] =
                mouse.is_mouse_button_pressed(sdl_mouse_button(button));
        }
        raw.mouse_x = mouse.x();
        raw.mouse_y = mouse.y();
        raw
    }

    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        let (Some(canvas), Some(texture)) = (self.canvas.as_mut(), self.texture.as_mut()) else {
            return Err(PixengError::Backend("present before init".into()));
        };

        texture
            .with_lock(None, |pixels: &mut [u8], pitch: usize| {
                buffer.write_rgb24(pixels, pitch)
            })
            .map_err(PixengError::Backend)??;

        canvas
            .copy(texture, None, None)
            .map_err(PixengError::Backend)?;
        canvas.present();
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.canvas.is_none() && self.texture.is_none() && self.texture_creator.is_none() {
            return Ok(());
        }
        // Texture first, then its creator, then the window.
        self.texture = None;
        self.texture_creator = None;
        self.canvas = None;
        log::info!("SDL2 backend shut down");
        Ok(())
    }
}

/// SDL scancode for a tracked key. Key scancodes are USB HID usage ids,
/// which SDL uses unchanged.
fn sdl_scancode(key: Key) -> Option<Scancode> {
    Scancode::from_i32(key.scancode() as i32)
}

fn sdl_mouse_button(button: MouseButton) -> sdl2::mouse::MouseButton {
    match button {
        MouseButton::Left => sdl2::mouse::MouseButton::Left,
        MouseButton::Middle => sdl2::mouse::MouseButton::Middle,
        MouseButton::Right => sdl2::mouse::MouseButton::Right,
        MouseButton::X1 => sdl2::mouse::MouseButton::X1,
        MouseButton::X2 => sdl2::mouse::MouseButton::X2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_an_sdl_scancode() {
        for &key in Key::ALL {
            assert!(sdl_scancode(key).is_some(), "{key:?}");
        }
    }

    #[test]
    fn scancodes_line_up_with_sdl() {
        assert_eq!(sdl_scancode(Key::A), Some(Scancode::A));
        assert_eq!(sdl_scancode(Key::Num0), Some(Scancode::Num0));
        assert_eq!(sdl_scancode(Key::Return), Some(Scancode::Return));
        assert_eq!(sdl_scancode(Key::Space), Some(Scancode::Space));
        assert_eq!(sdl_scancode(Key::Right), Some(Scancode::Right));
        assert_eq!(sdl_scancode(Key::Up), Some(Scancode::Up));
    }

    #[test]
    fn mouse_buttons_map_one_to_one() {
        assert_eq!(
            sdl_mouse_button(MouseButton::Left),
            sdl2::mouse::MouseButton::Left
        );
        assert_eq!(
            sdl_mouse_button(MouseButton::X2),
            sdl2::mouse::MouseButton::X2
        );
    }
}
