//! The transformation engine: one held picture and the operations on it.
//!
//! # Buffer Discipline
//!
//! Every operation reads only from the picture held before it starts.
//! `invert` and `grayscale` rewrite each cell from its own previous value, so
//! they run in place. Every other operation reads a frozen source and writes
//! a freshly allocated destination, which then replaces the held picture.
//! A failed operation leaves the held picture untouched.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, `x` grows right, `y` grows down
//! - Rotations are clockwise
//!
//! # Example
//!
//! ```ignore
//! use picture_core::{PixelGrid, TransformEngine};
//!
//! let mut engine = TransformEngine::new(PixelGrid::allocate(640, 480)?);
//! engine.rotate90()?;
//! assert_eq!(engine.picture().dimensions(), (480, 640));
//! ```

mod combine;
mod dimensions;
mod filter;
mod geometry;
mod pointwise;

pub use dimensions::{min_dimensions, trim_to_tile};

use thiserror::Error;

use crate::grid::{GridError, PixelGrid};

/// Error types for transformation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Allocation or pixel access failed inside the engine.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Mosaic tiles must be at least one pixel wide.
    #[error("Invalid tile size: must be a positive integer")]
    InvalidTileSize,
}

/// Holds the current picture and applies transformations to it.
///
/// The engine exclusively owns its picture. Operations that change
/// dimensions or combine sources drop the previous picture once the new one
/// is complete.
#[derive(Debug, Clone)]
pub struct TransformEngine {
    picture: PixelGrid,
    width: u32,
    height: u32,
}

impl TransformEngine {
    /// Wrap `picture`, capturing its dimensions as the original dimensions.
    pub fn new(picture: PixelGrid) -> Self {
        let (width, height) = picture.dimensions();
        Self {
            picture,
            width,
            height,
        }
    }

    /// The currently held picture.
    pub fn picture(&self) -> &PixelGrid {
        &self.picture
    }

    /// Release the held picture, consuming the engine.
    pub fn into_picture(self) -> PixelGrid {
        self.picture
    }

    /// Dimensions of the picture the engine was constructed with.
    ///
    /// These never change, even after an operation replaced the held
    /// picture with one of different size.
    pub fn original_dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn replace(&mut self, next: PixelGrid) {
        self.picture = next;
    }
}
