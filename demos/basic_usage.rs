//! Basic usage example for surfcrate
//! 
//! This example demonstrates fundamental operations:
//! - Binding a synthetic grid to an SVG scene
//! - Setting height and colour callbacks
//! - Coalescing a burst of rotations into one render
//! - Animating the next update with a transition

use surfcrate_core::{ColorScale, SurfaceConfig};
use surfcrate_render::{svg_surface, EventLoop};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("surfcrate Basic Usage Example");
    println!("=============================");

    // A bowl-shaped 9x9 grid
    let samples: Vec<Vec<f64>> = (0..9)
        .map(|r| {
            (0..9)
                .map(|c| {
                    let (x, y) = (r as f64 - 4.0, c as f64 - 4.0);
                    (x * x + y * y) / 16.0 - 1.0
                })
                .collect()
        })
        .collect();

    let event_loop = EventLoop::new();
    let (scene, engine) = svg_surface(samples, &SurfaceConfig::default(), &event_loop);

    let scale = ColorScale::default();
    engine
        .set_height_fn(|v: &f64, _, _| v * 40.0)
        .set_color_fn(move |v: &f64| scale.css(*v));

    println!("\nQueued tasks before the first turn: {}", event_loop.pending());
    event_loop.run_until_idle()?;
    println!("Renders so far: {}", engine.render_count());
    println!("Quads bound: {}", scene.borrow().paths().len());

    // A burst of rotations, as a drag would produce
    for step in 0..60 {
        engine.set_rotation(0.5 + step as f64 * 0.05, 0.5);
    }
    event_loop.run_until_idle()?;
    println!("\nAfter 60 rotations: {} renders in total", engine.render_count());

    // Animate the next update only
    engine.request_transition().delay(0).duration(500).height_fn(|v: &f64, _, _| v * 80.0);
    event_loop.run_until_idle()?;
    let animated = scene.borrow().paths().iter().filter(|p| p.transition.is_some()).count();
    println!("Animated elements in the last update: {}", animated);

    println!("\nSVG document is {} bytes", scene.borrow().to_svg().len());
    Ok(())
}
