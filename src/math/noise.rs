//! Smooth pseudo-random scalar fields sampled by the renderer and trails
//!
//! Everything downstream only needs `sample(x, y) -> [0, 1)`. The production
//! field is fractal Perlin noise; tests substitute closures.

use crate::io::configuration::{NOISE_OCTAVES, NOISE_PERSISTENCE};
use ::noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Largest value a field may return
pub const MAX_NOISE: f64 = 1.0 - f64::EPSILON;

/// Deterministic, continuous 2D field with values in `[0, 1)`
pub trait NoiseField {
    /// Value at `(x, y)`; identical inputs give identical outputs
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> NoiseField for F
where
    F: Fn(f64, f64) -> f64,
{
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Fractal Perlin noise remapped from `[-1, 1]` into `[0, 1)`
pub struct PerlinField {
    fbm: Fbm<Perlin>,
}

impl PerlinField {
    /// Build a field whose lattice gradients are derived from `seed`
    pub fn new(seed: u32) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(NOISE_OCTAVES)
            .set_persistence(NOISE_PERSISTENCE);
        Self { fbm }
    }
}

impl NoiseField for PerlinField {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let raw = self.fbm.get([x, y]);
        raw.mul_add(0.5, 0.5).clamp(0.0, MAX_NOISE)
    }
}
