use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixel_surface::core::{FrameTarget, PresentChain};
use pixel_surface::{CellMatrix, Color, Rasterizer, SurfaceSize};

/// Checkerboard-ish grid so neighbouring cells differ
fn grid(rows: usize, cols: usize) -> CellMatrix {
    let mut grid = CellMatrix::filled(rows, cols, Color::BLACK);
    for row in 0..rows {
        for col in 0..cols {
            let hue = ((row * 7 + col * 13) % 360) as f32 / 360.0;
            grid.set(row, col, Color::from_hsv(hue, 0.8, 1.0));
        }
    }
    grid
}

fn bench_paint(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_800x600");
    let size = SurfaceSize::new(800, 600).unwrap();

    for cells in [8usize, 64, 200] {
        let grid = grid(cells, cells);
        let mut rasterizer = Rasterizer::new(size, Color::BLACK);

        group.bench_with_input(BenchmarkId::from_parameter(cells), &grid, |b, grid| {
            b.iter(|| {
                rasterizer.clear();
                black_box(rasterizer.paint(black_box(grid)));
            })
        });
    }

    group.finish();
}

fn bench_plan(c: &mut Criterion) {
    let rasterizer = Rasterizer::new(SurfaceSize::new(1920, 1080).unwrap(), Color::BLACK);
    let grid = grid(270, 480);

    c.bench_function("plan_480x270_cells", |b| {
        b.iter(|| black_box(rasterizer.plan(black_box(&grid))))
    });
}

fn bench_present_chain(c: &mut Criterion) {
    let size = SurfaceSize::new(800, 600).unwrap();
    let mut rasterizer = Rasterizer::new(size, Color::BLACK);
    rasterizer.paint(&grid(60, 80));
    let mut chain = PresentChain::new(4, size);

    c.bench_function("chain_acquire_render_complete", |b| {
        b.iter(|| {
            let mut frame = chain.acquire();
            rasterizer.render(&mut frame.target());
            frame.complete();
            black_box(chain.shown());
        })
    });
}

fn bench_render_into_frame(c: &mut Criterion) {
    let size = SurfaceSize::new(1280, 720).unwrap();
    let mut rasterizer = Rasterizer::new(size, Color::BLACK);
    rasterizer.paint(&grid(90, 160));
    let mut pixels = vec![0u32; size.pixel_count()];

    c.bench_function("render_1280x720", |b| {
        b.iter(|| {
            rasterizer.render(&mut FrameTarget {
                pixels: &mut pixels,
                width: 1280,
                height: 720,
            });
            black_box(&pixels);
        })
    });
}

criterion_group!(
    benches,
    bench_paint,
    bench_plan,
    bench_present_chain,
    bench_render_into_frame,
);

criterion_main!(benches);
