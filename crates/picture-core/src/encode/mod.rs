//! Image encoding for Picture.
//!
//! This module provides functionality for:
//! - Encoding a picture to JPEG with configurable quality
//! - Encoding a picture to PNG or BMP (lossless)
//! - Saving a picture to a file, with the format taken from its extension
//!
//! # Examples
//!
//! ```ignore
//! use picture_core::encode::{save_picture, SaveOptions};
//!
//! save_picture(&picture, "out.png", &SaveOptions::default())?;
//! ```

mod jpeg;
mod lossless;

pub use jpeg::{encode_jpeg, DEFAULT_JPEG_QUALITY};
pub use lossless::{encode_bmp, encode_png};

use std::path::{Path, PathBuf};

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::grid::PixelGrid;

/// Errors that can occur while encoding or saving a picture.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The picture has no pixels (the degenerate blend/mosaic result).
    #[error("Cannot encode an empty picture")]
    EmptyPicture,

    /// The destination's extension does not name a supported format.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The destination could not be written.
    #[error("Invalid destination {}: {reason}", path.display())]
    InvalidDestination { path: PathBuf, reason: String },

    /// The encoder itself failed.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encoder settings that do not come from the destination path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOptions {
    /// JPEG quality (1-100), ignored for lossless formats.
    pub jpeg_quality: u8,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Encode `picture` in `format`.
///
/// # Errors
///
/// Returns `SaveError::UnsupportedFormat` for formats other than PNG, JPEG
/// and BMP, and `SaveError::EmptyPicture` for a 0x0 picture.
pub fn encode_picture(
    picture: &PixelGrid,
    format: ImageFormat,
    options: &SaveOptions,
) -> Result<Vec<u8>, SaveError> {
    match format {
        ImageFormat::Png => encode_png(picture),
        ImageFormat::Jpeg => encode_jpeg(picture, options.jpeg_quality),
        ImageFormat::Bmp => encode_bmp(picture),
        other => Err(SaveError::UnsupportedFormat(format!("{other:?}"))),
    }
}

/// Save `picture` to `path`, choosing the format from the file extension.
///
/// The file is only created once encoding has succeeded.
pub fn save_picture(
    picture: &PixelGrid,
    path: impl AsRef<Path>,
    options: &SaveOptions,
) -> Result<(), SaveError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).map_err(|_| {
        SaveError::UnsupportedFormat(
            path.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_else(|| "<none>".to_string()),
        )
    })?;

    let bytes = encode_picture(picture, format, options)?;
    std::fs::write(path, &bytes).map_err(|e| SaveError::InvalidDestination {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(
        path = %path.display(),
        format = ?format,
        bytes = bytes.len(),
        "saved picture"
    );
    Ok(())
}

/// Reject the 0x0 picture before handing pixels to an encoder.
fn ensure_not_empty(picture: &PixelGrid) -> Result<(), SaveError> {
    if picture.is_empty() {
        return Err(SaveError::EmptyPicture);
    }
    Ok(())
}
