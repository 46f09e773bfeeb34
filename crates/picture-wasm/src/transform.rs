//! WASM bindings for the transformation engine.
//!
//! Single-source operations are free functions taking one picture.
//! Multi-source operations go through [`JsPictureStack`], which collects the
//! base picture and its auxiliary pictures in order.

use crate::types::{to_js_error, JsPicture};
use picture_core::{FlipAxis, Operation, PixelGrid, Rotation, TransformEngine, TransformError};
use wasm_bindgen::prelude::*;

/// Invert every color channel.
#[wasm_bindgen]
pub fn invert(image: &JsPicture) -> Result<JsPicture, JsValue> {
    apply_single(image, Operation::Invert).map_err(to_js_error)
}

/// Replace every pixel with the average of its channels.
#[wasm_bindgen]
pub fn grayscale(image: &JsPicture) -> Result<JsPicture, JsValue> {
    apply_single(image, Operation::Grayscale).map_err(to_js_error)
}

/// Rotate clockwise by 90, 180 or 270 degrees.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate(picture, 90);
/// console.log(`${rotated.width}x${rotated.height}`); // dimensions swapped
/// ```
#[wasm_bindgen]
pub fn rotate(image: &JsPicture, degrees: u32) -> Result<JsPicture, JsValue> {
    let angle = Rotation::try_from(degrees).map_err(to_js_error)?;
    apply_single(image, Operation::Rotate { angle }).map_err(to_js_error)
}

/// Mirror left-right (`horizontal = true`) or top-bottom.
#[wasm_bindgen]
pub fn flip(image: &JsPicture, horizontal: bool) -> Result<JsPicture, JsValue> {
    let axis = if horizontal {
        FlipAxis::Horizontal
    } else {
        FlipAxis::Vertical
    };
    apply_single(image, Operation::Flip { axis }).map_err(to_js_error)
}

/// 3x3 box blur; edge pixels are left unchanged.
#[wasm_bindgen]
pub fn blur(image: &JsPicture) -> Result<JsPicture, JsValue> {
    apply_single(image, Operation::Blur).map_err(to_js_error)
}

/// Run a serialized operation against a single picture.
///
/// Blend and mosaic see only `image` itself; use [`JsPictureStack`] to pass
/// additional sources.
///
/// ```typescript
/// const flipped = apply_operation(picture, { type: "flip", axis: "V" });
/// ```
#[wasm_bindgen]
pub fn apply_operation(image: &JsPicture, operation: JsValue) -> Result<JsPicture, JsValue> {
    let operation: Operation = serde_wasm_bindgen::from_value(operation).map_err(to_js_error)?;
    apply_single(image, operation).map_err(to_js_error)
}

/// An ordered list of pictures for blend and mosaic.
///
/// The picture given to the constructor is the base; pushed pictures are
/// the additional sources, in push order.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const stack = new JsPictureStack(first);
/// stack.push(second);
/// stack.push(third);
/// const blended = stack.blend();
/// const tiled = stack.mosaic(16);
/// const same = stack.apply_operation({ type: "mosaic", tile_size: 16 });
/// ```
#[wasm_bindgen]
pub struct JsPictureStack {
    base: PixelGrid,
    others: Vec<PixelGrid>,
}

#[wasm_bindgen]
impl JsPictureStack {
    #[wasm_bindgen(constructor)]
    pub fn new(base: &JsPicture) -> Result<JsPictureStack, JsValue> {
        let base = base.to_grid().map_err(to_js_error)?;
        Ok(Self {
            base,
            others: Vec::new(),
        })
    }

    /// Append an additional source picture.
    pub fn push(&mut self, image: &JsPicture) -> Result<(), JsValue> {
        self.others.push(image.to_grid().map_err(to_js_error)?);
        Ok(())
    }

    /// Number of pictures, including the base.
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.others.len() + 1
    }

    /// Average all pictures over their shared region.
    pub fn blend(&self) -> Result<JsPicture, JsValue> {
        self.run(Operation::Blend).map_err(to_js_error)
    }

    /// Build a diagonal tile mosaic from all pictures.
    pub fn mosaic(&self, tile_size: u32) -> Result<JsPicture, JsValue> {
        self.run(Operation::Mosaic { tile_size }).map_err(to_js_error)
    }

    /// Run a serialized operation (e.g. `{ type: "rotate", angle: "90" }`)
    /// against the base picture, with the pushed pictures as auxiliaries.
    pub fn apply_operation(&self, operation: JsValue) -> Result<JsPicture, JsValue> {
        let operation: Operation =
            serde_wasm_bindgen::from_value(operation).map_err(to_js_error)?;
        self.run(operation).map_err(to_js_error)
    }
}

impl JsPictureStack {
    fn run(&self, operation: Operation) -> Result<JsPicture, TransformError> {
        apply(self.base.clone(), &self.others, operation)
    }
}

fn apply_single(image: &JsPicture, operation: Operation) -> Result<JsPicture, TransformError> {
    apply(image.to_grid()?, &[], operation)
}

fn apply(
    base: PixelGrid,
    auxiliary: &[PixelGrid],
    operation: Operation,
) -> Result<JsPicture, TransformError> {
    let mut engine = TransformEngine::new(base);
    operation.apply(&mut engine, auxiliary)?;
    Ok(JsPicture::from_grid(engine.picture()))
}
