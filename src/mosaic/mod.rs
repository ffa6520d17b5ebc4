//! Mosaic construction and per-frame drawing
//!
//! This module contains:
//! - Grid partitioning and block creation
//! - Static and animated block fills
//! - Noise-driven trail particles

/// Grid partitioning and color sampling
pub mod partition;
/// Block fill computation and drawing
pub mod renderer;
/// Trail particle animation
pub mod trails;

pub use partition::{Block, BlockGeometry};
pub use trails::{TrailAnimator, TrailParticle};
