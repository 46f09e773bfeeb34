//! The owned pixel buffer every transformation reads from and writes into.

use thiserror::Error;

use crate::color::Color;

/// Error types for pixel grid construction and access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Allocation was requested with a zero width or height.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimension { width: u32, height: u32 },

    /// A pixel access fell outside the grid.
    ///
    /// Correctly computed coordinates never produce this; seeing it means the
    /// index arithmetic of the caller is wrong.
    #[error("Pixel ({x}, {y}) is outside a {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A packed RGB buffer does not match the requested dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// A fixed-size 2D array of colors, stored in row-major order.
///
/// Dimensions never change after construction. Transformations that change
/// dimensions allocate a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Allocate a `width` x `height` grid filled with black.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimension` if either dimension is zero.
    pub fn allocate(width: u32, height: u32) -> Result<Self, GridError> {
        Self::filled(width, height, Color::BLACK)
    }

    /// Allocate a grid with every cell set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        })
    }

    /// The 0x0 grid produced when a multi-source operation has nothing to
    /// cover.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Build a grid from packed RGB bytes (3 bytes per pixel, row-major).
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(GridError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Color::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pack the grid into RGB bytes (3 bytes per pixel, row-major).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Create a grid from an `image::RgbImage`.
    pub fn from_rgb_image(img: &image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| Color::from(p.0)).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an `image::RgbImage` for encoding.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.to_rgb_bytes())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True for the 0x0 grid.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Read the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Result<Color, GridError> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Overwrite the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = color;
        Ok(())
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable access to all pixels in row-major order.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}
