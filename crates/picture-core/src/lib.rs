//! Picture Core - Raster image transformation library
//!
//! This crate provides the core functionality for Picture: an in-memory
//! pixel grid, a transformation engine over it, and the decode/encode
//! collaborators that move pictures between files and grids.
//!
//! # Module Structure
//!
//! - `color` - RGB color value and integer channel sums
//! - `grid` - `PixelGrid`, the owned pixel buffer
//! - `transform` - `TransformEngine` and every transformation
//! - `operation` - `Operation`, one selected transformation with operands
//! - `decode` - Loading pictures from files and bytes
//! - `encode` - Saving pictures to files and bytes
//!
//! # Usage
//!
//! ```ignore
//! use picture_core::{decode, encode, Operation, TransformEngine};
//!
//! let picture = decode::load_picture("in.png")?;
//! let mut engine = TransformEngine::new(picture);
//! Operation::Blur.apply(&mut engine, &[])?;
//! encode::save_picture(engine.picture(), "out.png", &Default::default())?;
//! ```

pub mod color;
pub mod decode;
pub mod encode;
pub mod grid;
pub mod operation;
pub mod transform;

pub use color::{ChannelSum, Color};
pub use decode::LoadError;
pub use encode::{SaveError, SaveOptions};
pub use grid::{GridError, PixelGrid};
pub use operation::{FlipAxis, Operation, ParseOperandError, Rotation};
pub use transform::{TransformEngine, TransformError};
