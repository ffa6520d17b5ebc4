//! Frame capture and animated GIF export

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, SketchError, invalid_source};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Collects rendered frames for GIF export
#[derive(Debug, Default)]
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
}

impl FrameCapture {
    /// Capture with room for `expected_frames`
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
        }
    }

    /// Store a copy of a rendered frame
    pub fn record(&mut self, frame: &RgbaImage) {
        self.frames.push(frame.clone());
    }

    /// Number of captured frames
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// How many captured frames are merged into one GIF frame
    ///
    /// Viewers clamp very short delays, so when the requested delay is below
    /// what they honor, frames are dropped to keep the apparent speed.
    pub const fn skip_factor(frame_delay_ms: u32) -> usize {
        if frame_delay_ms == 0 {
            return VIEWER_MIN_FRAME_DELAY_MS as usize;
        }
        if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        }
    }

    /// Indices of the captured frames that end up in the GIF
    ///
    /// The last captured frame is always kept.
    pub fn selected_indices(&self, frame_delay_ms: u32) -> Vec<usize> {
        let skip = Self::skip_factor(frame_delay_ms);
        let mut indices: Vec<usize> = (0..self.frames.len()).step_by(skip).collect();
        let last = self.frames.len().checked_sub(1);
        if last.is_some() && indices.last().copied() != last {
            indices.extend(last);
        }
        indices
    }

    /// Encode the captured frames as an animated GIF
    ///
    /// The final frame is held for longer so the end state is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_source(&"No frames captured for animation export"));
        }

        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let indices = self.selected_indices(frame_delay_ms);
        let last_position = indices.len().saturating_sub(1);

        let frames: Vec<Frame> = indices
            .iter()
            .enumerate()
            .filter_map(|(position, &index)| {
                let hold = if position == last_position {
                    FINAL_FRAME_HOLD
                } else {
                    1
                };
                self.frames.get(index).map(|buffer| {
                    Frame::from_parts(
                        buffer.clone(),
                        0,
                        0,
                        Delay::from_numer_denom_ms(delay_ms * hold, 1),
                    )
                })
            })
            .collect();

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SketchError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .map_err(|e| SketchError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        encoder
            .encode_frames(frames)
            .map_err(|e| SketchError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(
            path = %output_path.display(),
            frames = indices.len(),
            "Wrote mosaic animation"
        );
        Ok(())
    }
}
