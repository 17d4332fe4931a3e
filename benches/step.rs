use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use life_bench::config::{GRID_HEIGHT, GRID_WIDTH};
use life_bench::render::{PixelBuffer, TextRenderer};
use life_bench::{Grid, MovingAverage};

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid 128x128");

    group.bench_function("step", |b| {
        let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
        b.iter(|| {
            grid.step();
            black_box(grid.as_bytes());
        });
    });

    group.bench_function("render text + step", |b| {
        let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
        let mut text = TextRenderer::new();
        b.iter(|| {
            black_box(text.draw(&grid).len());
            grid.step();
        });
    });

    group.bench_function("render pixels + step", |b| {
        let mut grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
        let mut pixels = PixelBuffer::for_grid(&grid);
        b.iter(|| {
            black_box(pixels.draw(&grid).map(|bytes| bytes.len()).unwrap_or(0));
            grid.step();
        });
    });

    group.finish();
}

fn bench_moving_average(c: &mut Criterion) {
    c.bench_function("moving average add (window 1000)", |b| {
        let mut avg = MovingAverage::new(1000).unwrap();
        let mut value = 0.0;
        b.iter(|| {
            value += 0.5;
            black_box(avg.add(value));
        });
    });
}

criterion_group!(benches, bench_grid, bench_moving_average);
criterion_main!(benches);
