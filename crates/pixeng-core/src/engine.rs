//! The fixed-callback game loop.
//!
//! Each frame runs, in order: delta time, backend input poll, input tracker
//! update, clear to black, client update, present. Everything happens on
//! the calling thread; the client callback is the only writer to the pixel
//! buffer and the backend only reads it after the callback returns.

use std::time::Instant;

use crate::backend::DisplayBackend;
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::config::EngineConfig;
use crate::error::{PixengError, Result};
use crate::grid::LogicalGrid;
use crate::input::{Key, KeyState, MouseButton};
use crate::raster::Canvas;
use crate::tracker::InputTracker;

/// Hooks an application implements to be driven by the [`Engine`].
pub trait Client {
    /// Called once after the engine is created, before the first frame.
    fn on_initialize(&mut self, grid: &LogicalGrid) {
        let _ = grid;
    }

    /// Called once per frame with the seconds since the previous frame.
    /// Return `false` to stop the engine.
    fn on_update(&mut self, frame: &mut Frame<'_>, delta_time: f32) -> bool;

    /// Called once when the engine is torn down.
    fn on_shutdown(&mut self) {}
}

impl<C: Client + ?Sized> Client for Box<C> {
    fn on_initialize(&mut self, grid: &LogicalGrid) {
        (**self).on_initialize(grid);
    }

    fn on_update(&mut self, frame: &mut Frame<'_>, delta_time: f32) -> bool {
        (**self).on_update(frame, delta_time)
    }

    fn on_shutdown(&mut self) {
        (**self).on_shutdown();
    }
}

/// Lifecycle of a created engine. A failed [`Engine::create`] never yields
/// an engine, so there is no uninitialized value to observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Stopped,
}

/// A client's view of the current frame: drawing into the canvas and
/// reading this frame's input state.
pub struct Frame<'a> {
    canvas: &'a mut Canvas,
    input: &'a InputTracker,
}

impl<'a> Frame<'a> {
    pub fn new(canvas: &'a mut Canvas, input: &'a InputTracker) -> Self {
        Self { canvas, input }
    }

    pub fn grid(&self) -> &LogicalGrid {
        self.canvas.grid()
    }

    pub fn canvas(&mut self) -> &mut Canvas {
        self.canvas
    }

    pub fn input(&self) -> &InputTracker {
        self.input
    }

    pub fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }

    pub fn plot_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.canvas.plot_pixel(x, y, color);
    }

    pub fn plot_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.canvas.plot_line(x1, y1, x2, y2, color);
    }

    pub fn plot_line_horiz(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        self.canvas.plot_line_horiz(x1, x2, y, color);
    }

    pub fn plot_line_vert(&mut self, y1: i32, y2: i32, x: i32, color: Color) {
        self.canvas.plot_line_vert(y1, y2, x, color);
    }

    pub fn plot_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.canvas.plot_rectangle(x1, y1, x2, y2, color);
    }

    pub fn key_state(&self, key: Key) -> KeyState {
        self.input.key_state(key)
    }

    pub fn mouse_state(&self, button: MouseButton) -> KeyState {
        self.input.mouse_state(button)
    }

    /// Cursor x in physical window pixels.
    pub fn mouse_x(&self) -> i32 {
        self.input.mouse_x()
    }

    /// Cursor y in physical window pixels.
    pub fn mouse_y(&self) -> i32 {
        self.input.mouse_y()
    }

    /// The logical cell under the cursor, if it is over the grid.
    pub fn mouse_cell(&self) -> Option<(i32, i32)> {
        self.grid().cell_at(self.mouse_x(), self.mouse_y())
    }
}

/// Wall-clock frame timer. The first tick reports zero.
#[derive(Debug, Default)]
struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last
            .map_or(0.0, |last| now.duration_since(last).as_secs_f32());
        self.last = Some(now);
        delta
    }
}

/// Owns the pixel buffer, input tracker, backend, and client for one
/// window's lifetime.
pub struct Engine<B: DisplayBackend, C: Client> {
    config: EngineConfig,
    canvas: Canvas,
    input: InputTracker,
    backend: B,
    client: C,
    state: EngineState,
    frames: u64,
    torn_down: bool,
}

impl<B: DisplayBackend, C: Client> Engine<B, C> {
    /// Validate `config`, open the backend surface, allocate the buffer,
    /// and run the client's `on_initialize` hook.
    ///
    /// If the backend cannot be initialized it is shut down again and an
    /// [`PixengError::Init`] is returned; no frame runs.
    pub fn create(config: EngineConfig, mut backend: B, mut client: C) -> Result<Self> {
        let grid = LogicalGrid::from_config(&config)?;
        let (width, height) = (config.real_width(), config.real_height());

        if let Err(e) = backend.init(&config.title, width, height) {
            log::error!("Display backend init failed: {e}");
            if let Err(shutdown_err) = backend.shutdown() {
                log::warn!("Backend shutdown after failed init: {shutdown_err}");
            }
            return Err(match e {
                PixengError::Init(_) => e,
                other => PixengError::Init(other.to_string()),
            });
        }
        log::debug!(
            "Engine created: {}x{} cells at {}x{} ({width}x{height} px)",
            config.grid_width,
            config.grid_height,
            config.scale_x,
            config.scale_y,
        );

        client.on_initialize(&grid);

        Ok(Self {
            config,
            canvas: Canvas::new(grid),
            input: InputTracker::new(),
            backend,
            client,
            state: EngineState::Running,
            frames: 0,
            torn_down: false,
        })
    }

    /// Run frames until the client returns `false` or the backend reports
    /// quit. Returns the process exit status (0 on a normal stop).
    pub fn run(&mut self) -> Result<i32> {
        if self.state != EngineState::Running {
            return Err(PixengError::InvalidState("run() on a stopped engine".into()));
        }
        log::info!("Engine running: {}", self.config.title);

        let mut clock = FrameClock::default();
        while self.state == EngineState::Running {
            self.step(clock.tick())?;
        }

        log::info!("Engine stopped after {} frames", self.frames);
        Ok(0)
    }

    /// Run a single frame with the given delta time and return the state
    /// afterwards. A present failure stops the engine and is returned.
    pub fn step(&mut self, delta_time: f32) -> Result<EngineState> {
        if self.state != EngineState::Running {
            return Err(PixengError::InvalidState("step() on a stopped engine".into()));
        }

        let raw = self.backend.poll_input();
        self.input.update(&raw);
        self.canvas.clear(Color::BLACK);

        let keep_running = {
            let mut frame = Frame::new(&mut self.canvas, &self.input);
            self.client.on_update(&mut frame, delta_time)
        };
        self.frames += 1;

        if !keep_running || raw.quit {
            log::debug!(
                "Stop requested on frame {} (client={}, backend quit={})",
                self.frames,
                !keep_running,
                raw.quit
            );
            self.state = EngineState::Stopped;
            return Ok(self.state);
        }

        if let Err(e) = self.backend.present(self.canvas.buffer()) {
            log::error!("Present failed on frame {}: {e}", self.frames);
            self.state = EngineState::Stopped;
            return Err(e);
        }
        Ok(self.state)
    }

    /// Tear down: run the client's `on_shutdown` hook and release the
    /// backend. Safe to call more than once; `Drop` calls it too.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.torn_down {
            return Ok(());
        }
        self.torn_down = true;
        self.state = EngineState::Stopped;
        self.client.on_shutdown();
        self.backend.shutdown()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Frames whose client update has run.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &LogicalGrid {
        self.canvas.grid()
    }

    pub fn buffer(&self) -> &PixelBuffer {
        self.canvas.buffer()
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }
}

impl<B: DisplayBackend, C: Client> Drop for Engine<B, C> {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            log::warn!("Engine teardown failed: {e}");
        }
    }
}
