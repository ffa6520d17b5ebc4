//! Mathematical utilities for the sketch

/// Linear interpolation of scalars and colors
pub mod interpolation;
/// Noise fields driving color animation and trail motion
pub mod noise;
