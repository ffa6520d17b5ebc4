//! Frame progress for single images and batches

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {pos}/{len} frames")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress display for a run over one or more images
///
/// Each image gets a frame bar; a batch bar is added when several images
/// are processed. Only the most recent frame bars stay on screen.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    frame_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an empty progress display
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            frame_bars: Vec::new(),
        }
    }

    /// Prepare for `file_count` images
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Add a frame bar for a new image
    pub fn start_file(&mut self, path: &Path, frames: usize) {
        if self.frame_bars.len() >= MAX_INDIVIDUAL_PROGRESS_BARS {
            let oldest = self.frame_bars.remove(0);
            self.multi_progress.remove(&oldest);
        }

        let bar = ProgressBar::new(frames as u64);
        bar.set_style(FRAME_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );
        self.frame_bars.push(self.multi_progress.add(bar));
    }

    /// Report frames drawn for the current image
    pub fn update_frame(&self, frame: usize) {
        if let Some(bar) = self.frame_bars.last() {
            bar.set_position(frame as u64);
        }
    }

    /// Mark the current image as finished
    pub fn complete_file(&self) {
        if let Some(bar) = self.frame_bars.last() {
            bar.finish();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Frame bars currently on screen
    pub const fn visible_bars(&self) -> usize {
        self.frame_bars.len()
    }
}
