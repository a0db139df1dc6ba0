//! # surfcrate
//!
//! Interactive turntable rendering of height fields, such as antenna
//! phase-centre-variation grids, as depth-sorted flat-shaded quads.
//!
//! This is the umbrella crate that provides convenient access to all surfcrate functionality.
//! You can use this crate to get everything in one place, or use individual crates for
//! more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Sample grids, turntable rotations, view state, colour scales
//! - **Render**: Projection, depth sort, draw commands, debounced engine
//! - **I/O**: JSON sample and configuration loading, SVG output
//!
//! ## Quick Start
//!
//! ```rust
//! use surfcrate::prelude::*;
//!
//! let event_loop = EventLoop::new();
//! let samples = vec![vec![0.0, 0.5, 1.0], vec![0.2, 0.7, 1.2], vec![0.1, 0.4, 0.9]];
//! let (scene, engine) = svg_surface(samples, &SurfaceConfig::default(), &event_loop);
//!
//! let scale = ColorScale::default();
//! engine
//!     .set_height_fn(|v: &f64, _, _| v * 100.0)
//!     .set_color_fn(move |v: &f64| scale.css(*v));
//!
//! // every mutation above collapses into this one render
//! event_loop.run_until_idle().unwrap();
//! assert_eq!(scene.borrow().paths().len(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables core, render and io
//! - `render`: Surface engine and SVG scene
//! - `io`: Data file support
//! - `all`: Enables all features

// Re-export core functionality
pub use surfcrate_core::*;

// Re-export sub-crates
#[cfg(feature = "render")]
pub use surfcrate_render as render;

#[cfg(feature = "io")]
pub use surfcrate_io as io;

/// Convenient imports for common use cases
pub mod prelude {
    pub use surfcrate_core::*;

    #[cfg(feature = "render")]
    pub use surfcrate_render::*;

    #[cfg(feature = "io")]
    pub use surfcrate_io::*;
}
