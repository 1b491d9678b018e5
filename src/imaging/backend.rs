//! Resize backend trait and shared types.
//!
//! The [`ResizeBackend`] trait is the seam between batch orchestration and
//! pixel work: one operation, (source, geometry, destination) → written file.
//! The production implementation is
//! [`PngBackend`](super::png_backend::PngBackend); tests substitute the
//! recording [`MockBackend`](tests::MockBackend).

use crate::geometry::Geometry;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Full specification for one resize: *what* to do, not *how*.
///
/// Keeping the description separate from execution lets the batch runner
/// stay backend-agnostic and lets tests record operations without touching
/// pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub geometry: Geometry,
}

/// Trait for image resize backends.
///
/// A backend writes a resized copy of `params.source` to `params.output`,
/// fitting within `params.geometry` while preserving aspect ratio. The
/// source file is never modified.
pub trait ResizeBackend {
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
