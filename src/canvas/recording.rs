//! Canvas that records draw calls instead of rasterizing them

use crate::canvas::surface::{Canvas, DrawStyle};

/// One recorded draw call together with the style active when it was issued
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Canvas cleared to a gray level
    Background {
        /// Gray level
        gray: u8,
    },
    /// Rectangle
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Style at the time of the call
        style: DrawStyle,
    },
    /// Line segment
    Line {
        /// Start point
        from: [f64; 2],
        /// End point
        to: [f64; 2],
        /// Style at the time of the call
        style: DrawStyle,
    },
    /// Point
    Point {
        /// Position
        at: [f64; 2],
        /// Style at the time of the call
        style: DrawStyle,
    },
}

/// Canvas keeping an ordered log of every shape drawn on it
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    style: DrawStyle,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Empty log for a canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            style: DrawStyle::default(),
            commands: Vec::new(),
        }
    }

    /// Commands recorded so far, in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands, keeping the current style
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded rectangles only
    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn style_mut(&mut self) -> &mut DrawStyle {
        &mut self.style
    }

    fn background(&mut self, gray: u8) {
        self.commands.push(DrawCommand::Background { gray });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            style: self.style,
        });
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.commands.push(DrawCommand::Line {
            from: [x0, y0],
            to: [x1, y1],
            style: self.style,
        });
    }

    fn point(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::Point {
            at: [x, y],
            style: self.style,
        });
    }
}
