//! Command-line interface for rendering mosaic sketches from image files

use crate::canvas::RasterCanvas;
use crate::io::configuration::{
    DEFAULT_FRAMES, DEFAULT_NOISE_SEED, DEFAULT_SEED, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
    SketchConfig,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{SourceImage, export_canvas_as_png};
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameCapture;
use crate::math::noise::PerlinField;
use crate::sketch::{KeyPress, KeyScript, Sketch};
use clap::Parser;
use std::path::{Path, PathBuf};

/// File extensions accepted as source images
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Parser, Debug)]
#[command(name = "noisemosaic")]
#[command(
    author,
    version,
    about = "Render images as noise-animated color block mosaics"
)]
/// Command-line arguments for the mosaic renderer
pub struct Cli {
    /// Input image file or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of frames to draw per image
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Random seed for trail placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Seed of the noise field
    #[arg(long, default_value_t = DEFAULT_NOISE_SEED)]
    pub noise_seed: u32,

    /// Press `a` before the first frame so the sketch starts animated
    #[arg(short, long)]
    pub animate: bool,

    /// Scripted key press as FRAME:KEY, e.g. `30:a` (repeatable)
    #[arg(short, long = "key", value_name = "FRAME:KEY")]
    pub keys: Vec<KeyPress>,

    /// Also export every frame as an animated GIF
    #[arg(short, long)]
    pub gif: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Key presses to replay, including the implicit one from `--animate`
    pub fn key_script(&self) -> KeyScript {
        let mut presses = self.keys.clone();
        if self.animate {
            presses.insert(0, KeyPress { frame: 0, key: 'a' });
        }
        KeyScript::new(presses)
    }
}

/// Orchestrates rendering of one or more images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every selected image
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, image loading, rendering setup
    /// or export fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.frames == 0 {
            return Err(invalid_parameter(
                "frames",
                &self.cli.frames,
                &"at least one frame must be drawn",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::warn!(path = %self.cli.target.display(), "No images to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Source images selected by the target argument, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a supported image nor a
    /// readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"file must be a PNG or JPEG image",
                ));
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_supported_image(&path)
                    && !is_rendered_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = output_path(input_path, "png");
        if output_path.exists() {
            tracing::info!(input = %input_path.display(), "Skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let image = SourceImage::load(input_path)?;
        let (width, height) = (image.width(), image.height());

        let config = SketchConfig {
            seed: self.cli.seed,
            ..SketchConfig::default()
        };
        let mut sketch = Sketch::new(image, PerlinField::new(self.cli.noise_seed), config)?;
        let script = self.cli.key_script();

        let mut canvas = RasterCanvas::new(width, height);
        let mut capture = self.cli.gif.then(|| FrameCapture::new(self.cli.frames));

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path, self.cli.frames);
        }

        for frame in 0..self.cli.frames {
            for key in script.keys_at(frame) {
                if !sketch.handle_key(key) {
                    tracing::debug!(%key, frame, "Ignoring unbound key");
                }
            }

            sketch.draw_frame(&mut canvas);

            if let Some(ref mut capture) = capture {
                capture.record(canvas.pixels());
            }
            if let Some(ref pm) = self.progress_manager {
                pm.update_frame(frame + 1);
            }
        }

        export_canvas_as_png(canvas.pixels(), &output_path(input_path, "png"))?;

        if let Some(ref capture) = capture {
            capture.export_gif(&output_path(input_path, "gif"), GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }
}

/// Whether the path has a supported image extension
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Whether the path looks like a file this tool wrote
pub fn is_rendered_output(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}

/// Output path next to the input: `<stem>_mosaic.<extension>`
pub fn output_path(input_path: &Path, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
