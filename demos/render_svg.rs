//! Render a sample grid to an SVG file
//!
//! Loads a JSON document holding `samples` (or `pcv_values`), attaches an
//! engine to an in-memory SVG scene, optionally replays a pointer drag, and
//! writes the settled scene to disk.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::Parser;
use surfcrate_core::{ColorScale, SurfaceConfig};
use surfcrate_io::{load_config, load_samples, write_svg};
use surfcrate_render::{DragRotation, EventLoop, SurfaceRegistry, SvgScene};

#[derive(Parser, Debug)]
#[command(about = "Render a height field as a depth-sorted SVG surface", version)]
struct Args {
    /// JSON document with a `samples` (or `pcv_values`) grid
    #[arg(long)]
    data: PathBuf,

    /// Optional JSON surface configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the SVG document
    #[arg(long, default_value = "surface.svg")]
    output: PathBuf,

    /// Display width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Display height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Zoom level
    #[arg(long)]
    zoom: Option<f64>,

    /// Initial yaw in radians
    #[arg(long, allow_hyphen_values = true)]
    yaw: Option<f64>,

    /// Initial pitch in radians
    #[arg(long, allow_hyphen_values = true)]
    pitch: Option<f64>,

    /// Multiplier from sample value to height
    #[arg(long, default_value_t = 100.0)]
    height_scale: f64,

    /// Lower and upper sample bound of the colour scale
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_hyphen_values = true)]
    color_domain: Option<Vec<f64>>,

    /// Pointer drag to replay, as `x0,y0:x1,y1`
    #[arg(long)]
    drag: Option<Drag>,

    /// Number of pointer moves the drag is split into
    #[arg(long, default_value_t = 20)]
    drag_steps: usize,

    /// Animate the final update with this delay in milliseconds
    #[arg(long)]
    delay: Option<u64>,

    /// Animate the final update with this duration in milliseconds
    #[arg(long)]
    duration: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    from: (f64, f64),
    to: (f64, f64),
}

impl FromStr for Drag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let point = |p: &str| -> std::result::Result<(f64, f64), String> {
            let (x, y) = p.split_once(',').ok_or_else(|| format!("expected x,y but got '{}'", p))?;
            let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
            let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
            Ok((x, y))
        };
        let (from, to) = s.split_once(':').ok_or_else(|| format!("expected x0,y0:x1,y1 but got '{}'", s))?;
        Ok(Self {
            from: point(from)?,
            to: point(to)?,
        })
    }
}

fn build_config(args: &Args) -> Result<SurfaceConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display()))?,
        None => SurfaceConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(zoom) = args.zoom {
        config.zoom = zoom;
    }
    if let Some(yaw) = args.yaw {
        config.yaw = yaw;
    }
    if let Some(pitch) = args.pitch {
        config.pitch = pitch;
    }
    config.validate().context("invalid surface options")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let doc = load_samples(&args.data).with_context(|| format!("loading samples from {}", args.data.display()))?;
    let (rows, cols) = doc.dimensions();
    log::info!(
        "{}: {}x{} samples",
        doc.name.as_deref().unwrap_or("unnamed"),
        rows,
        cols
    );

    let config = build_config(&args)?;
    let color_scale = match args.color_domain.as_deref() {
        Some([min, max]) => ColorScale::new([*min, *max], surfcrate_core::PCV_HUE_RANGE),
        Some(_) => bail!("--color-domain takes exactly two values"),
        None => ColorScale::default(),
    };

    let event_loop = EventLoop::new();
    let mut registry = SurfaceRegistry::with_config(event_loop.clone(), config.clone());
    let mut scene = SvgScene::with_datum(config.width, config.height, doc.samples);
    scene.set_precision(config.precision);
    let scene = std::rc::Rc::new(std::cell::RefCell::new(scene));

    let engine = registry.attach(&scene, config.width, config.height);
    let height_scale = args.height_scale;
    engine
        .set_height_fn(move |v: &f64, _, _| v * height_scale)
        .set_color_fn(move |v: &f64| color_scale.css(*v));
    event_loop.run_until_idle().context("initial render")?;

    if let Some(drag) = args.drag {
        let turntable = engine.turntable();
        let mut rotation = DragRotation::new(turntable.yaw, turntable.pitch);
        rotation.pointer_down(drag.from.0, drag.from.1);
        let steps = args.drag_steps.max(1);
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let x = drag.from.0 + (drag.to.0 - drag.from.0) * t;
            let y = drag.from.1 + (drag.to.1 - drag.from.1) * t;
            rotation.drive(&engine, x, y);
        }
        rotation.pointer_up();
        log::info!("drag settled at yaw={:.3} pitch={:.3}", rotation.yaw(), rotation.pitch());
    }

    if args.delay.is_some() || args.duration.is_some() {
        let mut handle = engine.request_transition();
        if let Some(delay) = args.delay {
            handle = handle.delay(delay);
        }
        if let Some(duration) = args.duration {
            handle = handle.duration(duration);
        }
        handle.engine().set_zoom(engine.view().zoom);
    }

    event_loop.run_until_idle().context("final render")?;

    let svg = scene.borrow().to_svg();
    write_svg(&args.output, &svg).with_context(|| format!("writing {}", args.output.display()))?;
    println!(
        "{} quads rendered in {} passes -> {}",
        scene.borrow().paths().len(),
        engine.render_count(),
        args.output.display()
    );
    Ok(())
}
