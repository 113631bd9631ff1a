//! Primitive rasterization onto the logical grid.
//!
//! Every line entry point clamps its coordinates into the grid before
//! rasterizing, so out-of-range requests degrade to edge-aligned lines.
//! `plot_pixel` alone does no clamping: off-grid cells are dropped.

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::grid::LogicalGrid;

/// The cells visited by an integer Bresenham line from `(x1, y1)` to
/// `(x2, y2)`, both endpoints included, in drawing order.
///
/// Steps exactly one cell along the dominant axis per iteration (ties go to
/// the x axis) and carries the minor axis in an error accumulator seeded at
/// half the dominant delta. No clamping is applied here. Deltas are taken in
/// `i64`, so any pair of `i32` endpoints is accepted; the result holds one
/// point per dominant step.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    let dx = i64::from(x2) - i64::from(x1);
    let dy = i64::from(y2) - i64::from(y1);
    let (dx_abs, dy_abs) = (dx.abs(), dy.abs());
    let (sx, sy) = (dx.signum(), dy.signum());

    let mut points = Vec::with_capacity(dx_abs.max(dy_abs) as usize + 1);
    let (mut px, mut py) = (i64::from(x1), i64::from(y1));
    // Every visited coordinate lies between its endpoints, so it fits in i32.
    let mut push = |px: i64, py: i64| points.push((px as i32, py as i32));
    push(px, py);

    if dx_abs >= dy_abs {
        let mut err = dx_abs >> 1;
        for _ in 0..dx_abs {
            err += dy_abs;
            if err >= dx_abs {
                err -= dx_abs;
                py += sy;
            }
            px += sx;
            push(px, py);
        }
    } else {
        let mut err = dy_abs >> 1;
        for _ in 0..dy_abs {
            err += dx_abs;
            if err >= dy_abs {
                err -= dy_abs;
                px += sx;
            }
            py += sy;
            push(px, py);
        }
    }
    points
}

/// Drawing surface handed to clients: the pixel buffer plus its grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    buffer: PixelBuffer,
}

impl Canvas {
    pub fn new(grid: LogicalGrid) -> Self {
        Self {
            buffer: PixelBuffer::new(grid),
        }
    }

    pub fn grid(&self) -> &LogicalGrid {
        self.buffer.grid()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn clear(&mut self, color: Color) {
        self.buffer.clear(color);
    }

    /// Fill the physical block of cell `(x, y)`. No-op off the grid.
    pub fn plot_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.buffer.fill_block(x, y, color);
    }

    /// Bresenham line between two cells, endpoints clamped into the grid.
    pub fn plot_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let grid = *self.grid();
        let (x1, x2) = (grid.clamp_x(x1), grid.clamp_x(x2));
        let (y1, y2) = (grid.clamp_y(y1), grid.clamp_y(y2));
        for (x, y) in line_points(x1, y1, x2, y2) {
            self.plot_pixel(x, y, color);
        }
    }

    /// Row `y` from `x1` to `x2` inclusive, in either order.
    pub fn plot_line_horiz(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        let grid = *self.grid();
        let (x1, x2, y) = (grid.clamp_x(x1), grid.clamp_x(x2), grid.clamp_y(y));
        for x in x1.min(x2)..=x1.max(x2) {
            self.plot_pixel(x, y, color);
        }
    }

    /// Column `x` from `y1` to `y2` inclusive, in either order.
    pub fn plot_line_vert(&mut self, y1: i32, y2: i32, x: i32, color: Color) {
        let grid = *self.grid();
        let (y1, y2, x) = (grid.clamp_y(y1), grid.clamp_y(y2), grid.clamp_x(x));
        for y in y1.min(y2)..=y1.max(y2) {
            self.plot_pixel(x, y, color);
        }
    }

    /// Outline of the axis-aligned rectangle with corners `(x1, y1)` and
    /// `(x2, y2)`.
    pub fn plot_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.plot_line_vert(y1, y2, x2, color);
        self.plot_line_horiz(x1, x2, y1, color);
        self.plot_line_horiz(x1, x2, y2, color);
        self.plot_line_vert(y1, y2, x1, color);
    }
}
