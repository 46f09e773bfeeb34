//! Picture WASM - WebAssembly bindings for the Picture transformation engine
//!
//! This crate exposes picture-core to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for picture data
//! - `codec` - PNG/JPEG/BMP decoding and PNG/JPEG encoding
//! - `transform` - Single-source transformations and the multi-source stack
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, rotate, JsPictureStack } from '@picture/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const picture = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const rotated = rotate(picture, 270);
//!
//! const stack = new JsPictureStack(picture);
//! stack.push(rotated);
//! const blended = stack.blend();
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod transform;
mod types;

// Re-export public types
pub use codec::{decode_image, encode_jpeg, encode_png};
pub use transform::{apply_operation, blur, flip, grayscale, invert, rotate, JsPictureStack};
pub use types::JsPicture;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
