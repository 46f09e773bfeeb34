//! Image decoding for Picture.
//!
//! This module turns encoded images into [`PixelGrid`](crate::PixelGrid)s:
//! - Reading from a file path ([`load_picture`])
//! - Reading from an in-memory buffer ([`decode_picture`])
//!
//! The format is guessed from the content, not the file extension. Every
//! format enabled on the `image` dependency (PNG, JPEG, BMP) is accepted.
//! Alpha channels are dropped and all inputs are converted to 8-bit RGB.
//!
//! A failed decode never returns a partially populated picture.
//!
//! # Examples
//!
//! ```ignore
//! use picture_core::decode::load_picture;
//!
//! let picture = load_picture("photo.png")?;
//! println!("Decoded {}x{} picture", picture.width(), picture.height());
//! ```

mod reader;
mod types;

pub use reader::{decode_picture, load_picture};
pub use types::LoadError;
