//! Decoding from files and byte buffers via the `image` crate.

use std::io::{BufRead, Cursor, ErrorKind, Seek};
use std::path::Path;

use image::ImageReader;
use tracing::debug;

use super::LoadError;
use crate::grid::PixelGrid;

/// Load a picture from a file.
///
/// # Errors
///
/// Returns `LoadError::InvalidLocation` if the file does not exist or is not
/// a regular file, `LoadError::UnsupportedFormat` if the content is not a
/// recognized image, and `LoadError::Corrupted` if decoding fails.
pub fn load_picture(path: impl AsRef<Path>) -> Result<PixelGrid, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::InvalidLocation(path.to_path_buf()));
    }

    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::InvalidLocation(path.to_path_buf()),
        _ => LoadError::Io(e.to_string()),
    })?;

    let picture = decode_from(reader)?;
    debug!(
        path = %path.display(),
        width = picture.width(),
        height = picture.height(),
        "loaded picture"
    );
    Ok(picture)
}

/// Decode a picture from encoded bytes.
///
/// # Errors
///
/// Returns `LoadError::UnsupportedFormat` if the bytes are not a recognized
/// image and `LoadError::Corrupted` if decoding fails.
pub fn decode_picture(bytes: &[u8]) -> Result<PixelGrid, LoadError> {
    decode_from(ImageReader::new(Cursor::new(bytes)))
}

fn decode_from<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<PixelGrid, LoadError> {
    let reader = reader
        .with_guessed_format()
        .map_err(|e| LoadError::Io(e.to_string()))?;

    if reader.format().is_none() {
        return Err(LoadError::UnsupportedFormat);
    }

    let img = reader.decode().map_err(LoadError::from_image_error)?;
    let rgb = img.into_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(LoadError::Corrupted("image has no pixels".to_string()));
    }

    Ok(PixelGrid::from_rgb_image(&rgb))
}
