//! Thumbnail geometry parsing for the `WIDTHxHEIGHT` convention.
//!
//! A geometry is an ordered pair of positive pixel dimensions, written the
//! way ImageMagick writes them: `300x300`, `640x480`. Parsing is strict —
//! both sides of the `x` must be present and numeric — because a malformed
//! geometry is an argument error that has to abort the run before any file
//! is touched.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("geometry must be WIDTHxHEIGHT, got '{0}'")]
    MissingSeparator(String),
    #[error("geometry has an empty {side} component: '{input}'")]
    EmptyComponent { side: &'static str, input: String },
    #[error("geometry {side} is not a positive integer: '{value}'")]
    NotANumber { side: &'static str, value: String },
    #[error("geometry {side} must be greater than zero")]
    Zero { side: &'static str },
}

/// Target width × height for a resized image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
        }
    }
}

fn parse_side(side: &'static str, raw: &str, input: &str) -> Result<u32, GeometryError> {
    if raw.is_empty() {
        return Err(GeometryError::EmptyComponent {
            side,
            input: input.to_string(),
        });
    }
    let value: u32 = raw.parse().map_err(|_| GeometryError::NotANumber {
        side,
        value: raw.to_string(),
    })?;
    if value == 0 {
        return Err(GeometryError::Zero { side });
    }
    Ok(value)
}

impl FromStr for Geometry {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once('x')
            .ok_or_else(|| GeometryError::MissingSeparator(s.to_string()))?;
        Ok(Self {
            width: parse_side("width", w, s)?,
            height: parse_side("height", h, s)?,
        })
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
