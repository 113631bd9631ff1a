//! Benchmarks for rasterization and a full headless frame.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pixeng_core::engine::{Client, Engine, Frame};
use pixeng_core::grid::LogicalGrid;
use pixeng_core::headless::HeadlessBackend;
use pixeng_core::raster::{Canvas, line_points};
use pixeng_core::{Color, EngineConfig};

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_line");
    for scale in [1u32, 4, 8] {
        let grid = LogicalGrid::new(150, 100, scale, scale).unwrap();
        let mut canvas = Canvas::new(grid);
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, _| {
            b.iter(|| {
                for i in 0..100 {
                    canvas.plot_line(0, i, 149, 99 - i, Color::WHITE);
                }
            });
        });
    }
    group.finish();

    c.bench_function("line_points_steep", |b| {
        b.iter(|| line_points(0, 0, 37, 999));
    });
}

fn bench_rectangles(c: &mut Criterion) {
    let grid = LogicalGrid::new(150, 100, 4, 4).unwrap();
    let mut canvas = Canvas::new(grid);
    c.bench_function("plot_rectangle_nested", |b| {
        b.iter(|| {
            for i in 0..50 {
                canvas.plot_rectangle(i, i, 149 - i, 99 - i, Color::RED);
            }
        });
    });
}

/// Fills the grid one cell at a time, like the cellular automaton sample.
struct FullGrid;

impl Client for FullGrid {
    fn on_update(&mut self, frame: &mut Frame<'_>, _delta_time: f32) -> bool {
        let grid = *frame.grid();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let color = if (x + y) % 2 == 0 { Color::WHITE } else { Color::BLACK };
                frame.plot_pixel(x, y, color);
            }
        }
        true
    }
}

fn bench_frame(c: &mut Criterion) {
    let config = EngineConfig::new(150, 100, 4, 4);
    let mut engine = Engine::create(config, HeadlessBackend::new(), FullGrid).unwrap();
    c.bench_function("headless_frame_150x100x4", |b| {
        b.iter(|| engine.step(0.016));
    });
}

criterion_group!(benches, bench_lines, bench_rectangles, bench_frame);
criterion_main!(benches);
