//! WASM-compatible wrapper types for picture data.
//!
//! This module provides JavaScript-friendly types that wrap the core Picture
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use picture_core::{GridError, PixelGrid};
use wasm_bindgen::prelude::*;

/// A picture wrapper for JavaScript.
///
/// Holds dimensions and packed RGB bytes (3 bytes per pixel, row-major).
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsPicture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPicture {
    /// Create a new JsPicture from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Picture width in pixels
    /// * `height` - Picture height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPicture {
        JsPicture {
            width,
            height,
            pixels,
        }
    }

    /// Get the picture width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the picture height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// True for the 0x0 picture an empty blend or mosaic produces.
    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPicture {
    /// Create a JsPicture from a core picture.
    pub(crate) fn from_grid(grid: &PixelGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            pixels: grid.to_rgb_bytes(),
        }
    }

    /// Convert to a core picture, validating the buffer length.
    ///
    /// A 0x0 `JsPicture` converts to the empty picture.
    pub(crate) fn to_grid(&self) -> Result<PixelGrid, GridError> {
        if self.width == 0 && self.height == 0 && self.pixels.is_empty() {
            return Ok(PixelGrid::empty());
        }
        PixelGrid::from_rgb_bytes(self.width, self.height, &self.pixels)
    }
}

/// Convert any displayable error into a JavaScript exception value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
