//! Snake on a walled grid.
//!
//! Arrow keys turn, Q quits. Running into a wall or into the snake's own
//! body ends the game. Every apple grows the snake by one segment and
//! shortens the step interval.

use pixeng_core::grid::LogicalGrid;
use pixeng_core::{Client, Color, Frame, Key};

use super::rng::SimpleRng;

const START_STEP_SECS: f32 = 0.25;
const STEP_DECREMENT_SECS: f32 = 0.025;
const MIN_STEP_SECS: f32 = 0.03;

/// The first segments behind the head cannot touch it.
const SELF_COLLISION_SKIP: usize = 4;

type Cell = (i32, i32);

pub struct Snake {
    rng: SimpleRng,
    width: i32,
    height: i32,
    body: Vec<Cell>,
    walls: Vec<Cell>,
    apple: Cell,
    dir: (i32, i32),
    step_secs: f32,
    timer: f32,
    board_full: bool,
}

impl Snake {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            width: 0,
            height: 0,
            body: Vec::new(),
            walls: Vec::new(),
            apple: (0, 0),
            dir: (1, 0),
            step_secs: START_STEP_SECS,
            timer: 0.0,
            board_full: false,
        }
    }

    fn len(&self) -> usize {
        self.body.len()
    }

    fn head(&self) -> Option<Cell> {
        self.body.first().copied()
    }

    /// Apply this frame's turns. Returns `false` when the player quits.
    fn handle_input(&mut self, frame: &Frame<'_>) -> bool {
        let turns = [
            (Key::Left, (-1, 0)),
            (Key::Right, (1, 0)),
            (Key::Down, (0, 1)),
            (Key::Up, (0, -1)),
        ];
        for (key, (dx, dy)) in turns {
            if !frame.key_state(key).pressed {
                continue;
            }
            // Turning only happens across axes; the step is taken at once.
            if dx != 0 {
                self.dir.1 = 0;
                if self.dir.0 == 0 {
                    self.dir.0 = dx;
                    self.timer = self.step_secs;
                }
            } else {
                self.dir.0 = 0;
                if self.dir.1 == 0 {
                    self.dir.1 = dy;
                    self.timer = self.step_secs;
                }
            }
        }
        !frame.key_state(Key::Q).pressed
    }

    fn collides_with_self(&self) -> bool {
        let Some(head) = self.head() else {
            return false;
        };
        self.body
            .iter()
            .skip(SELF_COLLISION_SKIP)
            .any(|&part| part == head)
    }

    fn collides_with_wall(&self) -> bool {
        self.head().is_some_and(|head| self.walls.contains(&head))
    }

    fn on_apple(&self) -> bool {
        self.body.contains(&self.apple)
    }

    /// Move the apple to a random free interior cell. Returns `false` when
    /// the snake covers the whole interior.
    fn reposition_apple(&mut self) -> bool {
        let free: Vec<Cell> = (1..self.height - 1)
            .flat_map(|y| (1..self.width - 1).map(move |x| (x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        if free.is_empty() {
            return false;
        }
        let pick = self.rng.next_below(free.len() as u32) as usize;
        self.apple = free[pick];
        true
    }

    fn grow(&mut self) {
        if let Some(&tail) = self.body.last() {
            self.body.push(tail);
        }
    }

    fn advance(&mut self) {
        if self.timer < self.step_secs {
            return;
        }
        self.timer -= self.step_secs;
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        if let Some(head) = self.body.first_mut() {
            head.0 += self.dir.0;
            head.1 += self.dir.1;
        }
    }

    fn wrap_head(&mut self) {
        let (w, h) = (self.width, self.height);
        if let Some(head) = self.body.first_mut() {
            head.0 = head.0.rem_euclid(w);
            head.1 = head.1.rem_euclid(h);
        }
    }
}

impl Client for Snake {
    fn on_initialize(&mut self, grid: &LogicalGrid) {
        self.width = grid.width();
        self.height = grid.height();
        self.body = vec![(self.width / 2, self.height / 2)];
        self.dir = (1, 0);
        self.step_secs = START_STEP_SECS;
        self.timer = 0.0;

        self.walls.clear();
        for x in 0..self.width {
            self.walls.push((x, 0));
            self.walls.push((x, self.height - 1));
        }
        for y in 0..self.height {
            self.walls.push((0, y));
            self.walls.push((self.width - 1, y));
        }

        self.board_full = !self.reposition_apple();
        if self.board_full {
            log::warn!("Snake: {}x{} grid has no room for an apple", self.width, self.height);
        } else {
            log::info!("Snake: {}x{} grid", self.width, self.height);
        }
    }

    fn on_update(&mut self, frame: &mut Frame<'_>, delta_time: f32) -> bool {
        if self.board_full {
            return false;
        }
        self.timer += delta_time;

        if !self.handle_input(frame) {
            return false;
        }

        if self.collides_with_self() || self.collides_with_wall() {
            log::info!("Snake: game over at length {}", self.len());
            return false;
        }

        if self.on_apple() {
            if !self.reposition_apple() {
                log::info!("Snake: board full");
                self.board_full = true;
                return false;
            }
            self.grow();
            self.step_secs = (self.step_secs - STEP_DECREMENT_SECS).max(MIN_STEP_SECS);
        }

        self.advance();
        self.wrap_head();

        frame.plot_pixel(self.apple.0, self.apple.1, Color::GREEN);
        for &(x, y) in &self.walls {
            frame.plot_pixel(x, y, Color::BLUE);
        }
        for &(x, y) in &self.body {
            frame.plot_pixel(x, y, Color::RED);
        }
        true
    }
}
