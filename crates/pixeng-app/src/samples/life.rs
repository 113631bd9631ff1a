//! Conway's Game of Life on a fixed board.
//!
//! The outermost ring of cells is never updated and stays as seeded.

use pixeng_core::grid::LogicalGrid;
use pixeng_core::{Client, Color, Frame};

use super::rng::SimpleRng;

pub struct Life {
    rng: SimpleRng,
    width: usize,
    height: usize,
    state: Vec<bool>,
    output: Vec<bool>,
}

impl Life {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            width: 0,
            height: 0,
            state: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Board with the given live cells instead of a random seed.
    #[cfg(test)]
    fn with_cells(width: usize, height: usize, live: &[(usize, usize)]) -> Self {
        let mut life = Self::new(1);
        life.width = width;
        life.height = height;
        life.state = vec![false; width * height];
        life.output = vec![false; width * height];
        for &(x, y) in live {
            life.state[y * width + x] = true;
        }
        life
    }

    pub fn population(&self) -> usize {
        self.state.iter().filter(|&&alive| alive).count()
    }

    fn live_neighbours(&self, x: usize, y: usize) -> usize {
        let w = self.width;
        [
            (x - 1, y - 1),
            (x, y - 1),
            (x + 1, y - 1),
            (x - 1, y),
            (x + 1, y),
            (x - 1, y + 1),
            (x, y + 1),
            (x + 1, y + 1),
        ]
        .iter()
        .filter(|&&(nx, ny)| self.output[ny * w + nx])
        .count()
    }

    /// Advance one generation and return the previous one, which is what
    /// gets drawn this frame.
    fn generation(&mut self) -> &[bool] {
        self.output.copy_from_slice(&self.state);
        let w = self.width;
        for y in 1..self.height.saturating_sub(1) {
            for x in 1..w.saturating_sub(1) {
                let n = self.live_neighbours(x, y);
                let alive = self.output[y * w + x];
                self.state[y * w + x] = if alive { n == 2 || n == 3 } else { n == 3 };
            }
        }
        &self.output
    }
}

impl Client for Life {
    fn on_initialize(&mut self, grid: &LogicalGrid) {
        self.width = grid.width() as usize;
        self.height = grid.height() as usize;
        let cells = self.width * self.height;
        self.state = (0..cells).map(|_| self.rng.next_bool()).collect();
        self.output = vec![false; cells];
        log::info!(
            "Life: {}x{} board, {} live cells",
            self.width,
            self.height,
            self.population()
        );
    }

    fn on_update(&mut self, frame: &mut Frame<'_>, _delta_time: f32) -> bool {
        let w = self.width;
        let h = self.height;
        let shown = self.generation();
        for y in 1..h.saturating_sub(1) {
            for x in 1..w.saturating_sub(1) {
                let color = if shown[y * w + x] { Color::WHITE } else { Color::BLACK };
                frame.plot_pixel(x as i32, y as i32, color);
            }
        }
        true
    }
}
