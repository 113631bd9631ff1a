//! pixeng sample launcher.
//!
//! Opens an SDL2 window and runs one of the bundled sample clients.
//!
//! Usage:
//!   cargo run -p pixeng-app [base|snake|life]
//!   PIXENG_SAMPLE=life cargo run -p pixeng-app
//!   PIXENG_CONFIG=pixeng.toml cargo run -p pixeng-app snake
//!
//! The exit status is the engine's (0) on a normal stop and 1 when the
//! engine could not be created or a frame failed.

use std::process::ExitCode;

use anyhow::Context;
use pixeng_app::samples::Sample;
use pixeng_app::samples::rng::seed_from_time;
use pixeng_backend_sdl::SdlBackend;
use pixeng_core::{Engine, EngineConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(status) => ExitCode::from(u8::try_from(status).unwrap_or(1)),
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

fn run() -> anyhow::Result<i32> {
    // Sample from CLI arg, PIXENG_SAMPLE env var, or the base template.
    let name = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PIXENG_SAMPLE").ok())
        .unwrap_or_else(|| Sample::Base.name().to_string());
    let sample = Sample::from_name(&name)?;

    let config = match std::env::var("PIXENG_CONFIG") {
        Ok(path) => EngineConfig::load(&path)
            .with_context(|| format!("loading engine config from {path}"))?,
        Err(_) => sample.config(),
    };
    log::info!(
        "Starting sample '{}' ({}x{} cells at {}x{})",
        sample.name(),
        config.grid_width,
        config.grid_height,
        config.scale_x,
        config.scale_y,
    );

    let backend = SdlBackend::new()?.with_vsync(config.vsync);
    let mut engine = Engine::create(config, backend, sample.client(seed_from_time()))
        .context("creating engine")?;
    let status = engine.run()?;
    engine.shutdown()?;
    Ok(status)
}
