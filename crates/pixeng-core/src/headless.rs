//! In-memory display backend.
//!
//! Presents into an RGB24 byte buffer instead of a window and replays a
//! scripted queue of [`RawInput`] snapshots. Drives tests, benchmarks, and
//! offline rendering such as screenshots.

use std::collections::VecDeque;

use crate::backend::{DisplayBackend, RawInput};
use crate::buffer::{PixelBuffer, RGB24_BYTES};
use crate::error::{PixengError, Result};

/// Headless backend with scripted input.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    title: String,
    width: u32,
    height: u32,
    frame: Vec<u8>,
    initialized: bool,
    fail_init: Option<String>,
    script: VecDeque<RawInput>,
    idle: RawInput,
    quit_after: Option<u64>,
    polls: u64,
    presented: u64,
    shutdowns: u32,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `init` fail with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_init: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Queue one snapshot per frame. Once the queue runs dry the backend
    /// keeps reporting the last snapshot's held inputs.
    pub fn with_script(mut self, frames: impl IntoIterator<Item = RawInput>) -> Self {
        self.script.extend(frames);
        self
    }

    /// Report a quit request on poll number `frames + 1`.
    pub fn quit_after(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }

    pub fn push_input(&mut self, raw: RawInput) {
        self.script.push_back(raw);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of frames presented so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Number of input polls so far.
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Number of `shutdown` calls that released resources.
    pub fn shutdowns(&self) -> u32 {
        self.shutdowns
    }

    /// The last presented frame as packed RGB24.
    pub fn frame(&self) -> &[u8] {
        &self.frame
    }

    /// RGB triple of physical pixel `(px, py)` in the last presented frame.
    pub fn pixel(&self, px: u32, py: u32) -> Option<[u8; 3]> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let offset = (py as usize * self.width as usize + px as usize) * RGB24_BYTES;
        self.frame
            .get(offset..offset + RGB24_BYTES)
            .map(|p| [p[0], p[1], p[2]])
    }
}

impl DisplayBackend for HeadlessBackend {
    fn init(&mut self, title: &str, width: u32, height: u32) -> Result<()> {
        if let Some(reason) = &self.fail_init {
            return Err(PixengError::Init(reason.clone()));
        }
        self.title = title.to_string();
        self.width = width;
        self.height = height;
        self.frame = vec![0; width as usize * height as usize * RGB24_BYTES];
        self.initialized = true;
        log::debug!("Headless backend initialized: {width}x{height}");
        Ok(())
    }

    fn poll_input(&mut self) -> RawInput {
        self.polls += 1;
        let mut raw = match self.script.pop_front() {
            Some(raw) => {
                self.idle = RawInput {
                    quit: false,
                    ..raw
                };
                raw
            },
            None => self.idle,
        };
        if self.quit_after.is_some_and(|n| self.polls > n) {
            raw.quit = true;
        }
        raw
    }

    fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        if !self.initialized {
            return Err(PixengError::Backend("present before init".into()));
        }
        let pitch = self.width as usize * RGB24_BYTES;
        buffer.write_rgb24(&mut self.frame, pitch)?;
        self.presented += 1;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if self.initialized {
            self.initialized = false;
            self.frame = Vec::new();
            self.shutdowns += 1;
            log::debug!("Headless backend shut down");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::grid::LogicalGrid;
    use crate::input::Key;

    #[test]
    fn init_sizes_frame() {
        let mut b = HeadlessBackend::new();
        b.init("t", 4, 3).unwrap();
        assert_eq!(b.frame().len(), 4 * 3 * 3);
        assert_eq!(b.dimensions(), (4, 3));
        assert_eq!(b.title(), "t");
    }

    #[test]
    fn failing_init_reports_init_error() {
        let mut b = HeadlessBackend::failing("no display");
        assert!(matches!(b.init("t", 1, 1), Err(PixengError::Init(_))));
        assert!(!b.is_initialized());
    }

    #[test]
    fn present_copies_buffer() {
        let grid = LogicalGrid::new(2, 2, 2, 1).unwrap();
        let mut buf = PixelBuffer::new(grid);
        buf.fill_block(1, 1, Color::RED);
        let mut b = HeadlessBackend::new();
        b.init("t", 4, 2).unwrap();
        b.present(&buf).unwrap();
        assert_eq!(b.pixel(2, 1), Some([255, 0, 0]));
        assert_eq!(b.pixel(3, 1), Some([255, 0, 0]));
        assert_eq!(b.pixel(1, 1), Some([0, 0, 0]));
        assert_eq!(b.pixel(4, 0), None);
        assert_eq!(b.presented_frames(), 1);
    }

    #[test]
    fn present_before_init_fails() {
        let buf = PixelBuffer::new(LogicalGrid::new(1, 1, 1, 1).unwrap());
        let mut b = HeadlessBackend::new();
        assert!(b.present(&buf).is_err());
    }

    #[test]
    fn script_replays_then_holds_last_snapshot() {
        let held = RawInput::default().with_key(Key::A, true).with_quit();
        let mut b = HeadlessBackend::new().with_script([RawInput::default(), held]);
        assert!(!b.poll_input().key(Key::A));
        let second = b.poll_input();
        assert!(second.key(Key::A) && second.quit);
        let third = b.poll_input();
        assert!(third.key(Key::A));
        assert!(!third.quit);
    }

    #[test]
    fn quit_after_frames() {
        let mut b = HeadlessBackend::new().quit_after(2);
        assert!(!b.poll_input().quit);
        assert!(!b.poll_input().quit);
        assert!(b.poll_input().quit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut b = HeadlessBackend::new();
        b.shutdown().unwrap();
        assert_eq!(b.shutdowns(), 0);
        b.init("t", 1, 1).unwrap();
        b.shutdown().unwrap();
        b.shutdown().unwrap();
        assert_eq!(b.shutdowns(), 1);
    }
}
