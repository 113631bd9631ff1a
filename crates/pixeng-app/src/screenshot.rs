//! Headless frame capture for the bundled samples.
//!
//! Runs a sample against the in-memory backend with a fixed seed and a
//! fixed 60 Hz timestep, then saves the last rendered frame as a PNG.
//!
//! Usage:
//!   cargo run -p pixeng-app --bin pixeng-screenshot [sample] [frames] [out.png]
//!
//! Output defaults to `screenshots/{sample}.png`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use pixeng_app::samples::Sample;
use pixeng_core::headless::HeadlessBackend;
use pixeng_core::{Engine, EngineState};

const SEED: u32 = 0x5EED;
const DEFAULT_FRAMES: u32 = 60;
const TIMESTEP: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let sample = Sample::from_name(&args.next().unwrap_or_else(|| "life".to_string()))?;
    let frames = match args.next() {
        Some(n) => n.parse().with_context(|| format!("invalid frame count '{n}'"))?,
        None => DEFAULT_FRAMES,
    };
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new("screenshots").join(format!("{}.png", sample.name())));

    let config = sample.config();
    let (width, height) = (config.real_width(), config.real_height());
    let mut engine = Engine::create(config, HeadlessBackend::new(), sample.client(SEED))?;

    for _ in 0..frames {
        if engine.step(TIMESTEP)? == EngineState::Stopped {
            log::warn!("{} stopped after {} frames", sample.name(), engine.frame_count());
            break;
        }
    }

    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    save_png(&out, width, height, &engine.buffer().to_rgb24())?;
    log::info!("Saved {} ({width}x{height})", out.display());

    engine.shutdown()?;
    Ok(())
}

fn save_png(path: &Path, width: u32, height: u32, rgb: &[u8]) -> anyhow::Result<()> {
    let file = fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgb)?;
    Ok(())
}
