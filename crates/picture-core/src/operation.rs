//! A single requested transformation, as selected by a driver.
//!
//! Drivers (the CLI, the WASM bindings) translate their own input into an
//! [`Operation`] and run it with [`Operation::apply`]. The engine itself only
//! exposes typed methods and never sees operation names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::PixelGrid;
use crate::transform::{TransformEngine, TransformError};

/// Error returned when an operand string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOperandError {
    #[error("Unsupported rotation angle: {0} (expected 90, 180 or 270)")]
    Angle(String),

    #[error("Unsupported flip axis: {0} (expected H or V)")]
    Axis(String),
}

/// Clockwise rotation angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    #[serde(rename = "90")]
    Deg90,
    #[serde(rename = "180")]
    Deg180,
    #[serde(rename = "270")]
    Deg270,
}

impl Rotation {
    pub fn degrees(self) -> u32 {
        match self {
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }
}

impl FromStr for Rotation {
    type Err = ParseOperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "90" => Ok(Rotation::Deg90),
            "180" => Ok(Rotation::Deg180),
            "270" => Ok(Rotation::Deg270),
            other => Err(ParseOperandError::Angle(other.to_string())),
        }
    }
}

impl TryFrom<u32> for Rotation {
    type Error = ParseOperandError;

    fn try_from(degrees: u32) -> Result<Self, Self::Error> {
        match degrees {
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(ParseOperandError::Angle(other.to_string())),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Mirror axis for a flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipAxis {
    /// Mirror across the vertical axis (left and right swap).
    #[serde(rename = "H")]
    Horizontal,
    /// Mirror across the horizontal axis (top and bottom swap).
    #[serde(rename = "V")]
    Vertical,
}

impl FromStr for FlipAxis {
    type Err = ParseOperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" | "h" => Ok(FlipAxis::Horizontal),
            "V" | "v" => Ok(FlipAxis::Vertical),
            other => Err(ParseOperandError::Axis(other.to_string())),
        }
    }
}

impl fmt::Display for FlipAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipAxis::Horizontal => f.write_str("H"),
            FlipAxis::Vertical => f.write_str("V"),
        }
    }
}

/// One transformation with its operands.
///
/// Auxiliary pictures for `Blend` and `Mosaic` are passed separately to
/// [`Operation::apply`], since they come from the decoder rather than from
/// the command itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operation {
    Invert,
    Grayscale,
    Rotate { angle: Rotation },
    Flip { axis: FlipAxis },
    Blend,
    Blur,
    Mosaic { tile_size: u32 },
}

impl Operation {
    /// Whether this operation combines the current picture with others.
    pub fn is_multi_source(&self) -> bool {
        matches!(self, Operation::Blend | Operation::Mosaic { .. })
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Invert => "invert",
            Operation::Grayscale => "grayscale",
            Operation::Rotate { .. } => "rotate",
            Operation::Flip { .. } => "flip",
            Operation::Blend => "blend",
            Operation::Blur => "blur",
            Operation::Mosaic { .. } => "mosaic",
        }
    }

    /// Run this operation on `engine`.
    ///
    /// `auxiliary` is ignored by single-source operations.
    pub fn apply(
        self,
        engine: &mut TransformEngine,
        auxiliary: &[PixelGrid],
    ) -> Result<(), TransformError> {
        match self {
            Operation::Invert => engine.invert(),
            Operation::Grayscale => engine.grayscale(),
            Operation::Rotate { angle } => match angle {
                Rotation::Deg90 => engine.rotate90()?,
                Rotation::Deg180 => engine.rotate180()?,
                Rotation::Deg270 => engine.rotate270()?,
            },
            Operation::Flip { axis } => match axis {
                FlipAxis::Horizontal => engine.flip_horizontal()?,
                FlipAxis::Vertical => engine.flip_vertical()?,
            },
            Operation::Blend => engine.blend(auxiliary)?,
            Operation::Blur => engine.blur()?,
            Operation::Mosaic { tile_size } => engine.mosaic(tile_size, auxiliary)?,
        }
        Ok(())
    }
}
