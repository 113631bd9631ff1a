//! Physical-resolution pixel buffer.
//!
//! The buffer is the engine's single render target. It is sized to the full
//! physical resolution of the grid, row-major with the origin at the top
//! left, and every logical cell owns a `scale_x` x `scale_y` block of it.

use crate::color::Color;
use crate::error::{PixengError, Result};
use crate::grid::LogicalGrid;

/// Bytes per pixel in the packed RGB24 surface format.
pub const RGB24_BYTES: usize = 3;

/// Row-major buffer of [`Color`] at physical resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    grid: LogicalGrid,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a black buffer for `grid`.
    pub fn new(grid: LogicalGrid) -> Self {
        let len = grid.real_width() as usize * grid.real_height() as usize;
        Self {
            grid,
            pixels: vec![Color::BLACK; len],
        }
    }

    pub fn grid(&self) -> &LogicalGrid {
        &self.grid
    }

    /// Physical width in pixels.
    pub fn width(&self) -> usize {
        self.grid.real_width() as usize
    }

    /// Physical height in pixels.
    pub fn height(&self) -> usize {
        self.grid.real_height() as usize
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Fill every physical pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Color of physical pixel `(px, py)`.
    pub fn get(&self, px: usize, py: usize) -> Option<Color> {
        if px >= self.width() || py >= self.height() {
            return None;
        }
        Some(self.pixels[py * self.width() + px])
    }

    /// Color of logical cell `(x, y)`, read from its top-left physical pixel.
    pub fn cell(&self, x: i32, y: i32) -> Option<Color> {
        if !self.grid.contains(x, y) {
            return None;
        }
        self.get(
            (x * self.grid.scale_x()) as usize,
            (y * self.grid.scale_y()) as usize,
        )
    }

    /// Fill the physical block of logical cell `(x, y)` with `color`.
    /// Cells outside the grid are ignored.
    pub fn fill_block(&mut self, x: i32, y: i32, color: Color) {
        if !self.grid.contains(x, y) {
            return;
        }
        let width = self.width();
        let sx = self.grid.scale_x() as usize;
        let sy = self.grid.scale_y() as usize;
        let x0 = x as usize * sx;
        let y0 = y as usize * sy;
        for py in y0..y0 + sy {
            let row = py * width;
            self.pixels[row + x0..row + x0 + sx].fill(color);
        }
    }

    /// Pack the buffer into an RGB24 surface whose rows are `pitch` bytes
    /// apart. Padding bytes past each row are left untouched.
    pub fn write_rgb24(&self, dst: &mut [u8], pitch: usize) -> Result<()> {
        let row_bytes = self.width() * RGB24_BYTES;
        let needed = match self.height() {
            0 => 0,
            h => pitch * (h - 1) + row_bytes,
        };
        if pitch < row_bytes || dst.len() < needed {
            return Err(PixengError::Backend(format!(
                "RGB24 surface too small: {} bytes at pitch {pitch}, need {needed} at pitch >= {row_bytes}",
                dst.len()
            )));
        }
        for (row, src) in self.pixels.chunks_exact(self.width()).enumerate() {
            let out = &mut dst[row * pitch..row * pitch + row_bytes];
            for (px, color) in out.chunks_exact_mut(RGB24_BYTES).zip(src) {
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
            }
        }
        Ok(())
    }

    /// The buffer as tightly packed RGB24 bytes.
    pub fn to_rgb24(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r, c.g, c.b])
            .collect()
    }
}
