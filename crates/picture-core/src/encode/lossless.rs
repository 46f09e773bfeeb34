//! PNG and BMP encoding. Both preserve pixel values exactly.

use image::codecs::bmp::BmpEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{ensure_not_empty, SaveError};
use crate::grid::PixelGrid;

/// Encode a picture to PNG bytes.
pub fn encode_png(picture: &PixelGrid) -> Result<Vec<u8>, SaveError> {
    ensure_not_empty(picture)?;
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            &picture.to_rgb_bytes(),
            picture.width(),
            picture.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| SaveError::EncodingFailed(e.to_string()))?;
    Ok(buffer)
}

/// Encode a picture to uncompressed 24-bit BMP bytes.
pub fn encode_bmp(picture: &PixelGrid) -> Result<Vec<u8>, SaveError> {
    ensure_not_empty(picture)?;
    let mut buffer = Vec::new();
    BmpEncoder::new(&mut buffer)
        .write_image(
            &picture.to_rgb_bytes(),
            picture.width(),
            picture.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| SaveError::EncodingFailed(e.to_string()))?;
    Ok(buffer)
}
