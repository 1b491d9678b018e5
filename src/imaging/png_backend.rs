//! Production resize backend using the `image` crate.
//!
//! Decodes the source PNG, resizes to fit within the target geometry with
//! Lanczos3 resampling (aspect ratio preserved, never upscaled beyond the
//! requested box), and encodes the result back to PNG at the destination.
//! Everything is statically linked into the binary — no ImageMagick, no
//! system dependencies.

use super::backend::{BackendError, ResizeBackend, ResizeParams};
use image::imageops::FilterType;
use image::{ImageFormat, ImageReader};

/// Pure Rust backend using the `image` crate.
pub struct PngBackend;

impl PngBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PngBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeBackend for PngBackend {
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = ImageReader::open(&params.source)
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "Failed to decode {}: {}",
                    params.source.display(),
                    e
                ))
            })?;

        // Fit within the geometry box, preserving aspect ratio. Matches
        // ImageMagick's `-thumbnail WxH` sizing.
        let resized = img.resize(
            params.geometry.width,
            params.geometry.height,
            FilterType::Lanczos3,
        );

        resized
            .save_with_format(&params.output, ImageFormat::Png)
            .map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "Failed to encode {}: {}",
                    params.output.display(),
                    e
                ))
            })
    }
}
