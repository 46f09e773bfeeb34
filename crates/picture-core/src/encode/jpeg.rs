//! JPEG encoding for output files.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder.
//! JPEG is lossy, so a saved picture will not decode to exactly the same
//! pixels; use PNG or BMP when the transformed values must survive exactly.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{ensure_not_empty, SaveError};
use crate::grid::PixelGrid;

/// Quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encode a picture to JPEG bytes.
///
/// # Arguments
///
/// * `picture` - Picture to encode
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(picture: &PixelGrid, quality: u8) -> Result<Vec<u8>, SaveError> {
    ensure_not_empty(picture)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .write_image(
            &picture.to_rgb_bytes(),
            picture.width(),
            picture.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| SaveError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    proptest! {
        /// Property: Encoding always produces valid JPEG for non-empty pictures.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in 1u8..=100,
        ) {
            let size = (width * height * 3) as usize;
            let bytes: Vec<u8> = (0..size).map(|i| ((i * 37) % 256) as u8).collect();
            let picture = PixelGrid::from_rgb_bytes(width, height, &bytes).unwrap();

            let jpeg_bytes = encode_jpeg(&picture, quality).unwrap();

            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8], "Should have SOI marker");
            let len = jpeg_bytes.len();
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9], "Should have EOI marker");
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let picture = PixelGrid::allocate(width, height).unwrap();
            let first = encode_jpeg(&picture, quality).unwrap();
            let second = encode_jpeg(&picture, quality).unwrap();
            prop_assert_eq!(first, second, "Same input should produce same output");
        }
    }
}
