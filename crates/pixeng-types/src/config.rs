//! Engine configuration.
//!
//! The grid dimensions and scales are fixed for the lifetime of an engine.
//! A config can be built in code or read from TOML; every field is optional
//! in TOML and falls back to [`EngineConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PixengError, Result};

/// Window title, logical grid, and presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub title: String,
    /// Number of logical cells across.
    pub grid_width: u32,
    /// Number of logical cells down.
    pub grid_height: u32,
    /// Physical pixels per cell, horizontally.
    pub scale_x: u32,
    /// Physical pixels per cell, vertically.
    pub scale_y: u32,
    pub vsync: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "pixeng".to_string(),
            grid_width: 75,
            grid_height: 50,
            scale_x: 8,
            scale_y: 8,
            vsync: true,
        }
    }
}

impl EngineConfig {
    /// A config for a `grid_width` x `grid_height` grid of
    /// `scale_x` x `scale_y` pixel cells, defaults elsewhere.
    pub fn new(grid_width: u32, grid_height: u32, scale_x: u32, scale_y: u32) -> Self {
        Self {
            grid_width,
            grid_height,
            scale_x,
            scale_y,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Parse and validate a TOML config.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        log::debug!("Loading engine config from {}", path.display());
        Self::from_toml(&source)
            .map_err(|e| PixengError::Config(format!("{}: {e}", path.display())))
    }

    /// Check that every dimension and scale is strictly positive and that the
    /// physical surface fits the backend's signed 32-bit coordinates.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("grid_width", self.grid_width),
            ("grid_height", self.grid_height),
            ("scale_x", self.scale_x),
            ("scale_y", self.scale_y),
        ];
        for (name, value) in fields {
            if value == 0 {
                return Err(PixengError::Config(format!("{name} must be positive")));
            }
        }
        let fits = |cells: u32, scale: u32| {
            cells
                .checked_mul(scale)
                .is_some_and(|px| px <= i32::MAX as u32)
        };
        if !fits(self.grid_width, self.scale_x) || !fits(self.grid_height, self.scale_y) {
            return Err(PixengError::Config(format!(
                "physical size {}x{} cells at {}x{} overflows",
                self.grid_width, self.grid_height, self.scale_x, self.scale_y
            )));
        }
        Ok(())
    }

    /// Physical width in pixels.
    pub fn real_width(&self) -> u32 {
        self.grid_width * self.scale_x
    }

    /// Physical height in pixels.
    pub fn real_height(&self) -> u32 {
        self.grid_height * self.scale_y
    }
}
