//! Image resize capability — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode PNG** | `image` crate (pure Rust decoder) |
//! | **Resize** | `image::DynamicImage::resize` with `Lanczos3` filter |
//! | **Encode PNG** | `image::codecs::png::PngEncoder` via `save_with_format` |
//!
//! The module is split into:
//! - **Backend**: [`ResizeBackend`] trait + [`ResizeParams`]
//! - **PngBackend**: the production implementation

pub mod backend;
pub mod png_backend;

pub use backend::{BackendError, ResizeBackend, ResizeParams};
pub use png_backend::PngBackend;
