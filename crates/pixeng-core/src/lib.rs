//! pixeng core.
//!
//! Platform-agnostic retained-framebuffer engine for small pixel-grid
//! visualizations: a logical grid upscaled into a physical pixel buffer,
//! point/line/rectangle rasterization, edge-triggered input tracking, and a
//! fixed-callback game loop. Presentation and raw input go through the
//! [`backend::DisplayBackend`] trait.

// Re-exports from pixeng-types (foundation types).
pub use pixeng_types::color;
pub use pixeng_types::config;
pub use pixeng_types::error;
pub use pixeng_types::input;

pub mod backend;
pub mod buffer;
pub mod engine;
pub mod grid;
pub mod headless;
pub mod raster;
pub mod tracker;

pub use color::Color;
pub use config::EngineConfig;
pub use engine::{Client, Engine, EngineState, Frame};
pub use error::{PixengError, Result};
pub use input::{Key, KeyState, MouseButton};
