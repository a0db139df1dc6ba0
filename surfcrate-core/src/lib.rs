//! Core data structures for surfcrate
//! 
//! This crate provides the fundamental types shared by the surface renderer:
//! sample grids, turntable rotations, view parameters, colour scales and
//! configuration.

pub mod grid;
pub mod rotation;
pub mod view;
pub mod color;
pub mod config;
pub mod error;

pub use grid::*;
pub use rotation::*;
pub use view::*;
pub use color::*;
pub use config::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3, Matrix3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;
