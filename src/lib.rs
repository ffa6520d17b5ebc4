//! Grid mosaic renderer with noise-driven color animation
//!
//! A source image is cut into a seam-free grid of flat color blocks. When
//! animation is switched on, block colors drift toward noise-derived targets
//! and a swarm of particles paints image-colored trails over the mosaic.

#![forbid(unsafe_code)]

/// Drawing surfaces: the canvas trait, a rasterizer and a recorder
pub mod canvas;
/// Input/output operations, configuration and error handling
pub mod io;
/// Interpolation and noise fields
pub mod math;
/// Grid partitioning, block fills and trail particles
pub mod mosaic;
/// Sketch state and key handling
pub mod sketch;

pub use io::error::{Result, SketchError};
