use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use zenflow::{History, Renderer, SandCanvas, simulation};

fn painted_canvas(size: usize) -> SandCanvas {
    let mut canvas = SandCanvas::new(size, size);
    canvas.symmetry = true;
    for i in 0..(size / 4) as i64 {
        canvas.apply_stroke(i + 4, i + 4);
    }
    canvas.history = History::new();
    canvas
}

fn benchmark_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");

    for size in [100, 200, 400].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let canvas = painted_canvas(size);
            b.iter(|| {
                let mut grid = canvas.grid.clone();
                black_box(simulation::settle(&mut grid));
            });
        });
    }
    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let renderer = Renderer::default();

    for size in [100, 200, 400].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let canvas = painted_canvas(size);
            let mut rng = StdRng::seed_from_u64(1);
            let mut frame = image::RgbaImage::new(0, 0);
            b.iter(|| {
                renderer.render_into(&canvas.grid, &mut frame, &mut rng);
                black_box(&frame);
            });
        });
    }
    group.finish();
}

fn benchmark_stroke(c: &mut Criterion) {
    c.bench_function("stroke_400_with_snapshot", |b| {
        let canvas = painted_canvas(400);
        b.iter_batched(
            || canvas.clone(),
            |mut canvas| {
                canvas.apply_stroke(black_box(120), black_box(80));
                canvas
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, benchmark_settle, benchmark_render, benchmark_stroke);
criterion_main!(benches);
