//! Seam-free grid partitioning and per-block color sampling
//!
//! Nominal cell origins are accumulated in floating point and every edge is
//! rounded on its own. The right edge of one cell and the left edge of its
//! neighbour come from the same floating value, so they round identically and
//! the blocks tile the image with no gaps or overlaps. Rounding the cell
//! width instead would break that.

use crate::canvas::Rgba8;
use crate::io::configuration::{BLUE_NOISE_OFFSET, GREEN_NOISE_OFFSET, NOISE_SCALE, TARGET_BLEND};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::SourceImage;
use crate::math::interpolation::lerp;
use crate::math::noise::NoiseField;

/// Integer pixel rectangle of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGeometry {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels, always positive
    pub width: u32,
    /// Height in pixels, always positive
    pub height: u32,
}

impl BlockGeometry {
    /// Pixel the block's color is sampled from, clamped into the image
    pub fn center_sample(&self, image_width: u32, image_height: u32) -> (u32, u32) {
        let x = (self.x + self.width / 2).min(image_width.saturating_sub(1));
        let y = (self.y + self.height / 2).min(image_height.saturating_sub(1));
        (x, y)
    }

    /// Area in pixels
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// One flat-colored mosaic tile
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Position and size in image space
    pub geometry: BlockGeometry,
    /// Color sampled at the block center
    pub base_color: Rgba8,
    /// Noise-shifted RGB the block drifts toward when animated
    pub target_color: [f64; 3],
}

impl Block {
    /// Base color RGB as floating channels
    pub fn base_rgb(&self) -> [f64; 3] {
        [
            f64::from(self.base_color[0]),
            f64::from(self.base_color[1]),
            f64::from(self.base_color[2]),
        ]
    }

    /// Block origin divided by the image size
    pub fn normalized_position(&self, image_size: (u32, u32)) -> (f64, f64) {
        (
            f64::from(self.geometry.x) / f64::from(image_size.0),
            f64::from(self.geometry.y) / f64::from(image_size.1),
        )
    }
}

/// Build a block and derive its animation target color
///
/// Three noise samples at the block's scaled position, offset for green and
/// blue, form a noise color in `[0, 255]`; the target is that color blended
/// 60% over the sampled base.
pub fn make_block<N: NoiseField + ?Sized>(
    geometry: BlockGeometry,
    base_color: Rgba8,
    noise: &N,
    image_size: (u32, u32),
) -> Block {
    let nx = f64::from(geometry.x) / f64::from(image_size.0) * NOISE_SCALE;
    let ny = f64::from(geometry.y) / f64::from(image_size.1) * NOISE_SCALE;

    let noise_rgb = [
        noise.sample(nx, ny) * 255.0,
        noise.sample(nx + GREEN_NOISE_OFFSET, ny + GREEN_NOISE_OFFSET) * 255.0,
        noise.sample(nx + BLUE_NOISE_OFFSET, ny + BLUE_NOISE_OFFSET) * 255.0,
    ];

    let mut target_color = [0.0; 3];
    for ((target, &base), noise_channel) in target_color
        .iter_mut()
        .zip(base_color.iter())
        .zip(noise_rgb)
    {
        *target = lerp(f64::from(base), noise_channel, TARGET_BLEND);
    }

    Block {
        geometry,
        base_color,
        target_color,
    }
}

/// Integer cell rectangles for an `segments`×`segments` grid over `width`×`height`
///
/// Cells are produced row-major. Cells whose rounded size collapses to zero
/// are dropped.
///
/// # Errors
///
/// Returns an error if `segments` is zero
pub fn grid_cells(width: u32, height: u32, segments: u32) -> Result<Vec<BlockGeometry>> {
    if segments == 0 {
        return Err(invalid_parameter(
            "num_segments",
            &segments,
            &"grid needs at least one segment per axis",
        ));
    }

    let image_w = f64::from(width);
    let image_h = f64::from(height);
    let cell_w = image_w / f64::from(segments);
    let cell_h = image_h / f64::from(segments);

    let mut cells = Vec::with_capacity((segments as usize).pow(2));

    let mut seg_y = 0.0;
    while seg_y < image_h {
        let y0 = seg_y.round();
        // Drift can leave a nominal cell starting just short of the edge
        let y1 = (seg_y + cell_h).round().min(image_h);

        let mut seg_x = 0.0;
        while seg_x < image_w {
            let x0 = seg_x.round();
            let x1 = (seg_x + cell_w).round().min(image_w);

            if x1 > x0 && y1 > y0 {
                cells.push(BlockGeometry {
                    x: x0 as u32,
                    y: y0 as u32,
                    width: (x1 - x0) as u32,
                    height: (y1 - y0) as u32,
                });
            }

            seg_x += cell_w;
        }

        seg_y += cell_h;
    }

    Ok(cells)
}

/// Partition an image into sampled, animation-ready blocks
///
/// # Errors
///
/// Returns an error if `segments` is zero
pub fn partition_image<N: NoiseField + ?Sized>(
    image: &SourceImage,
    segments: u32,
    noise: &N,
) -> Result<Vec<Block>> {
    let image_size = (image.width(), image.height());
    let blocks: Vec<Block> = grid_cells(image_size.0, image_size.1, segments)?
        .into_iter()
        .map(|geometry| {
            let (sx, sy) = geometry.center_sample(image_size.0, image_size.1);
            let base_color = image.get(i64::from(sx), i64::from(sy));
            make_block(geometry, base_color, noise, image_size)
        })
        .collect();

    tracing::debug!(
        segments,
        blocks = blocks.len(),
        width = image_size.0,
        height = image_size.1,
        "Partitioned image into mosaic blocks"
    );

    Ok(blocks)
}
