//! # thumbnail-cli
//!
//! Batch PNG thumbnail generator. Given a list of `.png` files, it writes a
//! resized copy of each one next to the source (or into `-o DIR`), naming
//! the copy by dropping the filename's final underscore-delimited token and
//! tagging it `_tn`:
//!
//! ```text
//! thumbnail-cli -g 300x300 photos/sample_2021_01.png
//!     → photos/sample_2021_tn.png
//! ```
//!
//! # Architecture
//!
//! Processing is strictly sequential and stateless — each invocation
//! operates only on the files named on the command line, and one file's
//! failure never stops the rest of the batch. The crate is split so that
//! everything with behavior worth testing is pure or backend-agnostic:
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | `WIDTHxHEIGHT` parsing — argument errors abort before any file IO |
//! | [`naming`] | Pure thumbnail filename derivation (strip last `_token`, tag `_tn`) |
//! | [`batch`] | Validation, per-file job planning, the skip-and-continue run loop |
//! | [`imaging`] | The [`ResizeBackend`](imaging::ResizeBackend) seam + `image`-crate implementation |
//! | [`output`] | Pure line formatting for dry-run traces and verbose output |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging (No ImageMagick)
//!
//! The resize runs through the `image` crate (Lanczos3 resampling) rather
//! than shelling out to `convert`. The binary is fully self-contained: no
//! `apt install`, no PATH lookups, no version conflicts. The fit-within
//! sizing matches what `convert -thumbnail WxH` would have produced.
//!
//! ## The Backend Seam
//!
//! The batch runner only knows the narrow [`imaging::ResizeBackend`] trait —
//! (source, geometry, destination) → success/failure. Unit tests substitute
//! a recording mock, so the whole skip/continue/dry-run policy is tested
//! without encoding a single pixel.
//!
//! ## Two Error Classes, Nothing In Between
//!
//! Argument problems (bad geometry, missing output directory, no files) are
//! fatal before any file is touched. After validation, nothing is: non-PNG
//! inputs and failed conversions are skipped silently and the batch
//! continues. There is deliberately no per-file error chatter — the only
//! per-file output is the dry-run trace and, under `-v`, created paths.

pub mod batch;
pub mod geometry;
pub mod imaging;
pub mod naming;
pub mod output;
