//! Error type for image decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Error types for loading a picture.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The location does not point to a readable file.
    #[error("Invalid location: {}", .0.display())]
    InvalidLocation(PathBuf),

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    Corrupted(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    Io(String),
}

impl LoadError {
    /// Map an `image` crate error onto the load taxonomy.
    pub(crate) fn from_image_error(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Unsupported(_) => LoadError::UnsupportedFormat,
            image::ImageError::IoError(e) => LoadError::Io(e.to_string()),
            other => LoadError::Corrupted(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::InvalidLocation(PathBuf::from("missing.png"));
        assert_eq!(err.to_string(), "Invalid location: missing.png");

        let err = LoadError::UnsupportedFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");

        let err = LoadError::Corrupted("bad header".to_string());
        assert_eq!(
            err.to_string(),
            "Corrupted or incomplete image file: bad header"
        );
    }

    #[test]
    fn test_from_io_image_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err = LoadError::from_image_error(image::ImageError::IoError(io));
        assert!(matches!(err, LoadError::Io(_)));
    }
}
