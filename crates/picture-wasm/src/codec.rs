//! Picture decoding and encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_png, encode_jpeg, invert } from '@picture/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const picture = decode_image(bytes);
//! const png = encode_png(invert(picture));
//! const jpeg = encode_jpeg(picture, 90);
//! ```

use crate::types::{to_js_error, JsPicture};
use picture_core::{decode, encode};
use wasm_bindgen::prelude::*;

/// Decode PNG, JPEG or BMP bytes into a picture.
///
/// The format is detected from the file contents. Any alpha channel is
/// dropped.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPicture, JsValue> {
    let grid = decode::decode_picture(bytes).map_err(to_js_error)?;
    Ok(JsPicture::from_grid(&grid))
}

/// Encode a picture as PNG bytes.
///
/// # Errors
///
/// Returns an error for an empty picture or a malformed pixel buffer.
#[wasm_bindgen]
pub fn encode_png(image: &JsPicture) -> Result<Vec<u8>, JsValue> {
    let grid = image.to_grid().map_err(to_js_error)?;
    encode::encode_png(&grid).map_err(to_js_error)
}

/// Encode a picture as JPEG bytes.
///
/// * `quality` - 1-100, recommended: 90
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPicture, quality: u8) -> Result<Vec<u8>, JsValue> {
    let grid = image.to_grid().map_err(to_js_error)?;
    encode::encode_jpeg(&grid, quality).map_err(to_js_error)
}
