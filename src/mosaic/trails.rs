//! Noise-driven particles painting image-colored trails

use crate::canvas::Canvas;
use crate::io::configuration::{
    TRAIL_SEED_X_RANGE, TRAIL_SEED_Y_RANGE, TRAIL_STROKE_ALPHA, TRAIL_STROKE_WEIGHT,
};
use crate::io::image::SourceImage;
use crate::math::noise::NoiseField;
use rand::Rng;

/// A wandering point whose path is fixed by its noise-space seed
#[derive(Debug, Clone, PartialEq)]
pub struct TrailParticle {
    /// Noise input coordinate, never changed after creation
    pub seed: [f64; 2],
    /// Canvas position from the previous frame; `None` right after seeding
    pub last_position: Option<[f64; 2]>,
}

impl TrailParticle {
    /// Particle with a fresh seed and no history
    pub const fn new(seed: [f64; 2]) -> Self {
        Self {
            seed,
            last_position: None,
        }
    }

    /// Canvas position at the given noise time
    pub fn position<N: NoiseField + ?Sized>(
        &self,
        noise: &N,
        noise_time: f64,
        canvas_size: (u32, u32),
    ) -> [f64; 2] {
        [
            noise.sample(self.seed[0], noise_time) * f64::from(canvas_size.0),
            noise.sample(self.seed[1], noise_time) * f64::from(canvas_size.1),
        ]
    }
}

/// The full particle set drawn on top of the mosaic while animating
#[derive(Debug, Clone, Default)]
pub struct TrailAnimator {
    particles: Vec<TrailParticle>,
}

impl TrailAnimator {
    /// Animator with no particles
    pub const fn new() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Current particles
    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    /// Discard all particles and draw `count` new seeds
    pub fn reseed<R: Rng>(&mut self, rng: &mut R, count: usize) {
        self.particles = (0..count)
            .map(|_| {
                TrailParticle::new([
                    rng.random_range(TRAIL_SEED_X_RANGE.0..TRAIL_SEED_X_RANGE.1),
                    rng.random_range(TRAIL_SEED_Y_RANGE.0..TRAIL_SEED_Y_RANGE.1),
                ])
            })
            .collect();
    }

    /// Advance every particle to `noise_time` and paint its segment
    ///
    /// Stroke color is the image color under the new position at fixed
    /// alpha. A particle without history gets a point, otherwise a line from
    /// its previous position.
    pub fn draw<N, C>(&mut self, image: &SourceImage, noise: &N, noise_time: f64, canvas: &mut C)
    where
        N: NoiseField + ?Sized,
        C: Canvas + ?Sized,
    {
        let canvas_size = (canvas.width(), canvas.height());

        for particle in &mut self.particles {
            let [x, y] = particle.position(noise, noise_time, canvas_size);

            let [r, g, b, _] = image.get(x.floor() as i64, y.floor() as i64);

            canvas.no_fill();
            canvas.stroke([r, g, b, TRAIL_STROKE_ALPHA]);
            canvas.stroke_weight(TRAIL_STROKE_WEIGHT);

            match particle.last_position {
                Some([last_x, last_y]) => canvas.line(last_x, last_y, x, y),
                None => canvas.point(x, y),
            }

            particle.last_position = Some([x, y]);
        }
    }
}
