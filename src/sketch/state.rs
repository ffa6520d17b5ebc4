//! Application state and the per-frame update
//!
//! All mutable sketch state lives in [`Sketch`]. Input is applied between
//! frames through [`Sketch::apply`], so a toggle is fully visible to the next
//! [`Sketch::draw_frame`].

use crate::canvas::Canvas;
use crate::io::configuration::{BACKGROUND_GRAY, SketchConfig};
use crate::io::error::Result;
use crate::io::image::SourceImage;
use crate::math::noise::NoiseField;
use crate::mosaic::partition::{Block, partition_image};
use crate::mosaic::renderer::{FillMode, render_blocks};
use crate::mosaic::trails::{TrailAnimator, TrailParticle};
use crate::sketch::input::{SketchCommand, command_for_key};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Mosaic, animation flag, noise clock and trails for one source image
pub struct Sketch<N: NoiseField> {
    image: SourceImage,
    noise: N,
    config: SketchConfig,
    blocks: Vec<Block>,
    animation_active: bool,
    noise_time: f64,
    trails: TrailAnimator,
    rng: StdRng,
    frame_count: usize,
}

impl<N: NoiseField> Sketch<N> {
    /// Partition the image and start with animation off and time at zero
    ///
    /// # Errors
    ///
    /// Returns an error if the configured segment count is zero
    pub fn new(image: SourceImage, noise: N, config: SketchConfig) -> Result<Self> {
        let blocks = partition_image(&image, config.num_segments, &noise)?;
        let rng = StdRng::seed_from_u64(config.seed);

        Ok(Self {
            image,
            noise,
            config,
            blocks,
            animation_active: false,
            noise_time: 0.0,
            trails: TrailAnimator::new(),
            rng,
            frame_count: 0,
        })
    }

    /// Mosaic blocks in row-major order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Source image
    pub const fn image(&self) -> &SourceImage {
        &self.image
    }

    /// Whether colors and trails are animating
    pub const fn animation_active(&self) -> bool {
        self.animation_active
    }

    /// Current noise time
    pub const fn noise_time(&self) -> f64 {
        self.noise_time
    }

    /// Trail particles; empty until animation is first enabled
    pub fn particles(&self) -> &[TrailParticle] {
        self.trails.particles()
    }

    /// Frames drawn so far
    pub const fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Run a command between frames
    pub fn apply(&mut self, command: SketchCommand) {
        match command {
            SketchCommand::ToggleAnimation => self.toggle_animation(),
        }
    }

    /// Dispatch a key press; returns whether the key was bound
    pub fn handle_key(&mut self, key: char) -> bool {
        let Some(command) = command_for_key(key) else {
            return false;
        };
        self.apply(command);
        true
    }

    /// Flip the animation flag
    ///
    /// Turning animation on replaces the whole particle set with fresh seeds.
    /// Turning it off leaves particles and noise time untouched.
    pub fn toggle_animation(&mut self) {
        self.animation_active = !self.animation_active;

        if self.animation_active {
            self.trails.reseed(&mut self.rng, self.config.trail_points);
        }

        tracing::info!(
            active = self.animation_active,
            noise_time = self.noise_time,
            trails = self.trails.particles().len(),
            "Animation toggled"
        );
    }

    /// Draw one frame and advance the noise clock if animating
    pub fn draw_frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let image_size = (self.image.width(), self.image.height());

        canvas.background(BACKGROUND_GRAY);

        if self.animation_active {
            let mode = FillMode::Animated {
                noise: &self.noise,
                noise_time: self.noise_time,
            };
            render_blocks(&self.blocks, image_size, mode, canvas);
            self.trails
                .draw(&self.image, &self.noise, self.noise_time, canvas);
            self.noise_time += self.config.noise_time_step;
        } else {
            render_blocks(&self.blocks, image_size, FillMode::Static, canvas);
        }

        self.frame_count += 1;
    }
}
