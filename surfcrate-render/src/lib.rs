//! Turntable rendering of height fields
//!
//! This crate turns a grid of samples into a depth-sorted list of flat-shaded
//! quads viewed through an orthographic yaw/pitch rotation:
//! - Projection of grid cells into screen space
//! - Quad extraction and painter's-algorithm ordering
//! - Draw-command frames bound to a [`RenderSurface`] with enter/update/exit semantics
//! - Debounced redraws on a single-threaded [`EventLoop`]
//! - Pointer-drag rotation

pub mod projection;
pub mod quad;
pub mod frame;
pub mod decorations;
pub mod surface;
pub mod scheduler;
pub mod engine;
pub mod transition;
pub mod registry;
pub mod interaction;

pub use projection::*;
pub use quad::*;
pub use frame::*;
pub use decorations::DecorationStyle;
pub use surface::*;
pub use scheduler::*;
pub use engine::*;
pub use transition::*;
pub use registry::*;
pub use interaction::*;

use std::cell::RefCell;
use std::rc::Rc;

use surfcrate_core::SurfaceConfig;

/// Create an [`SvgScene`] bound to `rows` and attach an engine to it on `event_loop`
pub fn svg_surface<T: 'static>(
    rows: Vec<Vec<T>>,
    config: &SurfaceConfig,
    event_loop: &EventLoop,
) -> (Rc<RefCell<SvgScene<T>>>, Engine<T>) {
    let mut scene = SvgScene::with_datum(config.width, config.height, rows);
    scene.set_precision(config.precision);
    let scene = Rc::new(RefCell::new(scene));
    let engine = Engine::with_config(Rc::clone(&scene), event_loop.clone(), config);
    (scene, engine)
}
