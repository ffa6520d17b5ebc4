//! Per-frame block fills, static or noise-animated

use crate::canvas::{Canvas, Rgba8};
use crate::io::configuration::NOISE_SCALE;
use crate::math::interpolation::{channel_to_u8, lerp_rgb};
use crate::math::noise::NoiseField;
use crate::mosaic::partition::Block;

/// How block colors are chosen for a frame
#[derive(Clone, Copy)]
pub enum FillMode<'a> {
    /// Every block shows its sampled color unchanged
    Static,
    /// Blocks blend toward their target color by a time-varying noise weight
    Animated {
        /// Noise field providing the blend weight
        noise: &'a dyn NoiseField,
        /// Current global noise time
        noise_time: f64,
    },
}

/// Blend weight `t` for a block at the given noise time
///
/// Only the vertical noise coordinate moves with time.
pub fn blend_weight<N: NoiseField + ?Sized>(
    block: &Block,
    image_size: (u32, u32),
    noise: &N,
    noise_time: f64,
) -> f64 {
    let (nx, ny) = block.normalized_position(image_size);
    noise.sample(nx * NOISE_SCALE, ny.mul_add(NOISE_SCALE, noise_time))
}

/// RGB between base (`t = 0`) and target (`t = 1`)
pub fn animated_rgb(block: &Block, t: f64) -> [f64; 3] {
    lerp_rgb(block.base_rgb(), block.target_color, t)
}

/// Fill color for a block; alpha always comes from the sampled base color
pub fn fill_color(block: &Block, image_size: (u32, u32), mode: FillMode<'_>) -> Rgba8 {
    match mode {
        FillMode::Static => block.base_color,
        FillMode::Animated { noise, noise_time } => {
            let t = blend_weight(block, image_size, noise, noise_time);
            let [r, g, b] = animated_rgb(block, t);
            [
                channel_to_u8(r),
                channel_to_u8(g),
                channel_to_u8(b),
                block.base_color[3],
            ]
        }
    }
}

/// Paint every block as an outline-free rectangle
///
/// Outlines are disabled so neighbouring blocks of different colors meet
/// without a visible seam.
pub fn render_blocks<C: Canvas + ?Sized>(
    blocks: &[Block],
    image_size: (u32, u32),
    mode: FillMode<'_>,
    canvas: &mut C,
) {
    for block in blocks {
        canvas.fill(fill_color(block, image_size, mode));
        canvas.no_stroke();
        let geometry = block.geometry;
        canvas.rect(
            f64::from(geometry.x),
            f64::from(geometry.y),
            f64::from(geometry.width),
            f64::from(geometry.height),
        );
    }
}
