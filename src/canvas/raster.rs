//! Software rasterizer over an RGBA buffer
//!
//! Shapes cover a pixel when the pixel center lies inside them. Colors are
//! composited source-over, so opaque fills overwrite exactly and translucent
//! strokes accumulate. Lines and points get round caps.

use crate::canvas::surface::{Canvas, DrawStyle, Rgba8};
use image::{Rgba, RgbaImage};

/// Canvas that paints into an owned `RgbaImage`
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    pixels: RgbaImage,
    style: DrawStyle,
}

impl RasterCanvas {
    /// Transparent canvas of the given size with the default style
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            style: DrawStyle::default(),
        }
    }

    /// Rendered pixels
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the canvas and return its pixels
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }

    fn blend(&mut self, x: i64, y: i64, color: Rgba8) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(pixel) = self.pixels.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = Rgba(source_over(color, pixel.0));
        }
    }

    // Pixels whose centers lie within `radius` of the segment (x0,y0)-(x1,y1)
    fn fill_capsule(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, radius: f64, color: Rgba8) {
        let min_x = (x0.min(x1) - radius).floor().max(0.0) as i64;
        let min_y = (y0.min(y1) - radius).floor().max(0.0) as i64;
        let max_x = (x0.max(x1) + radius).ceil().min(f64::from(self.width())) as i64;
        let max_y = (y0.max(y1) + radius).ceil().min(f64::from(self.height())) as i64;

        let dx = x1 - x0;
        let dy = y1 - y0;
        let length_sq = dx.mul_add(dx, dy * dy);
        let radius_sq = radius * radius;

        for py in min_y..max_y {
            for px in min_x..max_x {
                let cx = px as f64 + 0.5;
                let cy = py as f64 + 0.5;
                let along = if length_sq > 0.0 {
                    ((cx - x0).mul_add(dx, (cy - y0) * dy) / length_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let ex = cx - along.mul_add(dx, x0);
                let ey = cy - along.mul_add(dy, y0);
                if ex.mul_add(ex, ey * ey) <= radius_sq {
                    self.blend(px, py, color);
                }
            }
        }
    }
}

/// Composite `src` over `dst`
pub fn source_over(src: Rgba8, dst: Rgba8) -> Rgba8 {
    if src[3] == 255 {
        return src;
    }
    if src[3] == 0 {
        return dst;
    }
    let src_a = f64::from(src[3]) / 255.0;
    let dst_a = f64::from(dst[3]) / 255.0;
    let out_a = dst_a.mul_add(1.0 - src_a, src_a);
    let mix = |s: u8, d: u8| {
        let value = f64::from(s).mul_add(src_a, f64::from(d) * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn style_mut(&mut self) -> &mut DrawStyle {
        &mut self.style
    }

    fn background(&mut self, gray: u8) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba([gray, gray, gray, 255]);
        }
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if let Some(color) = self.style.fill {
            // Covered columns are those whose centers fall in [x, x + width)
            let x_start = (x - 0.5).ceil().max(0.0) as i64;
            let y_start = (y - 0.5).ceil().max(0.0) as i64;
            let x_end = (x + width - 0.5).ceil().min(f64::from(self.width())) as i64;
            let y_end = (y + height - 0.5).ceil().min(f64::from(self.height())) as i64;
            for py in y_start..y_end {
                for px in x_start..x_end {
                    self.blend(px, py, color);
                }
            }
        }

        if self.style.stroke.is_some() {
            let (x1, y1) = (x + width, y + height);
            self.line(x, y, x1, y);
            self.line(x1, y, x1, y1);
            self.line(x1, y1, x, y1);
            self.line(x, y1, x, y);
        }
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        if let Some(color) = self.style.stroke {
            let radius = self.style.stroke_weight / 2.0;
            self.fill_capsule(x0, y0, x1, y1, radius, color);
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        if let Some(color) = self.style.stroke {
            // A point always marks at least the pixel it lands in
            let radius = (self.style.stroke_weight / 2.0).max(0.5);
            self.fill_capsule(x, y, x, y, radius, color);
        }
    }
}
