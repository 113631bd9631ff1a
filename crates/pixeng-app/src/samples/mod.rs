//! Sample clients shipped with the launcher.

pub mod base;
pub mod life;
pub mod rng;
pub mod snake;

use pixeng_core::{Client, EngineConfig};

/// Selectable sample programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Base,
    Snake,
    Life,
}

impl Sample {
    pub const ALL: [Sample; 3] = [Sample::Base, Sample::Snake, Sample::Life];

    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "base" => Ok(Sample::Base),
            "snake" => Ok(Sample::Snake),
            "life" | "cellular_automata" => Ok(Sample::Life),
            other => {
                let known: Vec<&str> = Self::ALL.iter().map(|s| s.name()).collect();
                anyhow::bail!("unknown sample '{other}' (expected one of: {})", known.join(", "))
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Sample::Base => "base",
            Sample::Snake => "snake",
            Sample::Life => "life",
        }
    }

    /// Window geometry the sample was designed for: a 600x400 window.
    pub fn config(self) -> EngineConfig {
        let config = match self {
            Sample::Base | Sample::Snake => EngineConfig::new(75, 50, 8, 8),
            Sample::Life => EngineConfig::new(150, 100, 4, 4),
        };
        config.with_title(format!("pixeng - {}", self.name()))
    }

    pub fn client(self, seed: u32) -> Box<dyn Client> {
        match self {
            Sample::Base => Box::new(base::Base),
            Sample::Snake => Box::new(snake::Snake::new(seed)),
            Sample::Life => Box::new(life::Life::new(seed)),
        }
    }
}
