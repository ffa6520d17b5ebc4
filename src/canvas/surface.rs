//! Drawing surface abstraction shared by the mosaic and trail passes
//!
//! The interface mirrors an immediate-mode sketch canvas: style state
//! (fill, stroke, stroke weight) is set first and applies to every shape
//! drawn until it changes.

/// RGBA color with 8-bit channels
pub type Rgba8 = [u8; 4];

/// Current fill/stroke state of a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStyle {
    /// Interior color, `None` after `no_fill`
    pub fill: Option<Rgba8>,
    /// Outline color, `None` after `no_stroke`
    pub stroke: Option<Rgba8>,
    /// Outline width in pixels
    pub stroke_weight: f64,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            fill: Some([255, 255, 255, 255]),
            stroke: Some([0, 0, 0, 255]),
            stroke_weight: 1.0,
        }
    }
}

/// Immediate-mode drawing target
pub trait Canvas {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Mutable access to the style applied to subsequent shapes
    fn style_mut(&mut self) -> &mut DrawStyle;

    /// Clear the whole surface to an opaque gray level
    fn background(&mut self, gray: u8);

    /// Axis-aligned rectangle using the current fill and stroke
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Line segment using the current stroke
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);

    /// Single point drawn as a stroke-weight disc
    fn point(&mut self, x: f64, y: f64);

    /// Set the fill color
    fn fill(&mut self, color: Rgba8) {
        self.style_mut().fill = Some(color);
    }

    /// Disable filling
    fn no_fill(&mut self) {
        self.style_mut().fill = None;
    }

    /// Set the stroke color
    fn stroke(&mut self, color: Rgba8) {
        self.style_mut().stroke = Some(color);
    }

    /// Disable stroking
    fn no_stroke(&mut self) {
        self.style_mut().stroke = None;
    }

    /// Set the stroke width in pixels
    fn stroke_weight(&mut self, weight: f64) {
        self.style_mut().stroke_weight = weight;
    }
}
