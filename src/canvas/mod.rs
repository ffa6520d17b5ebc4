//! Drawing surfaces
//!
//! This module contains:
//! - The `Canvas` trait every render pass draws through
//! - A software rasterizer producing RGBA frames
//! - A recording canvas that logs draw calls

/// Software rasterizer over an RGBA buffer
pub mod raster;
/// Draw-call recorder
pub mod recording;
/// Canvas trait and drawing style
pub mod surface;

pub use raster::RasterCanvas;
pub use recording::{DrawCommand, RecordingCanvas};
pub use surface::{Canvas, DrawStyle, Rgba8};
