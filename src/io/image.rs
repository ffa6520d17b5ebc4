//! Source image loading, clamped pixel sampling and PNG export

use crate::io::error::{Result, SketchError, invalid_source};
use image::RgbaImage;
use std::path::Path;

/// Read-only RGBA raster the mosaic and trails sample from
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// Decode an image file into RGBA
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded, or if it has
    /// a zero dimension
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = image::open(path).map_err(|e| SketchError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        let image = Self::from_rgba(decoded.into_rgba8())?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Loaded source image"
        );
        Ok(image)
    }

    /// Wrap an already decoded raster
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(invalid_source(&format!(
                "image must be at least 1x1, got {}x{}",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// RGBA value at `(x, y)`, with both coordinates clamped into the image
    pub fn get(&self, x: i64, y: i64) -> [u8; 4] {
        let cx = x.clamp(0, i64::from(self.width()) - 1) as u32;
        let cy = y.clamp(0, i64::from(self.height()) - 1) as u32;
        self.pixels.get_pixel(cx, cy).0
    }
}

/// Save a rendered raster as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_canvas_as_png(pixels: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    pixels
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| SketchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %output_path.display(), "Wrote mosaic frame");
    Ok(())
}
