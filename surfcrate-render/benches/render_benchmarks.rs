use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use surfcrate_core::{ColorScale, SurfaceConfig};
use surfcrate_render::{EventLoop, svg_surface};

// zenith 0..90 by 5 degrees, azimuth 0..360 by 5 degrees
const GRID_SIZES: [(usize, usize); 3] = [(19, 19), (73, 19), (73, 73)];

fn pcv_grid(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| 2.0 * ((r as f64) * 0.15).sin() * ((c as f64) * 0.2).cos())
                .collect()
        })
        .collect()
}

fn full_render(c: &mut Criterion) {
    let scale = ColorScale::default();
    let config = SurfaceConfig::default();

    let mut g = c.benchmark_group("full render");
    g.sample_size(20);

    for (rows, cols) in GRID_SIZES {
        let event_loop = EventLoop::new();
        let (_scene, engine) = svg_surface(pcv_grid(rows, cols), &config, &event_loop);
        engine
            .set_height_fn(|v: &f64, _, _| v * 100.0)
            .set_color_fn(move |v: &f64| scale.css(*v));

        g.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &engine,
            |b, engine| {
                b.iter(|| std::hint::black_box(engine.render_now().unwrap()));
            },
        );
    }

    g.finish();
}

fn drag_burst(c: &mut Criterion) {
    let config = SurfaceConfig::default();
    let event_loop = EventLoop::new();
    let (_scene, engine) = svg_surface(pcv_grid(73, 19), &config, &event_loop);
    engine.set_height_fn(|v: &f64, _, _| v * 100.0);

    c.bench_function("drag burst of 50 rotations", |b| {
        b.iter(|| {
            for i in 0..50 {
                engine.set_rotation(i as f64 * 0.02, 0.3);
            }
            event_loop.run_until_idle().unwrap()
        });
    });
}

criterion_group!(benches, full_render, drag_burst);
criterion_main!(benches);
