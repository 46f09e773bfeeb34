//! Per-pixel color operations applied in place.

use tracing::debug;

use super::TransformEngine;
use crate::color::Color;

impl TransformEngine {
    /// Replace every channel `c` with `255 - c`.
    pub fn invert(&mut self) {
        debug!(dimensions = ?self.picture.dimensions(), "invert");
        self.map_pixels(Color::inverted);
    }

    /// Replace every pixel with the truncated mean of its three channels.
    pub fn grayscale(&mut self) {
        debug!(dimensions = ?self.picture.dimensions(), "grayscale");
        self.map_pixels(Color::gray);
    }

    /// Each cell is rewritten from its own previous value only, so no
    /// second buffer is needed.
    fn map_pixels(&mut self, f: impl Fn(Color) -> Color) {
        for pixel in self.picture.pixels_mut() {
            *pixel = f(*pixel);
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::grid::PixelGrid;
    use proptest::prelude::*;

    /// Strategy for generating a random picture (keep small for speed).
    fn picture_strategy() -> impl Strategy<Value = PixelGrid> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(width, height)| {
            let size = (width * height * 3) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |bytes| PixelGrid::from_rgb_bytes(width, height, &bytes).unwrap())
        })
    }

    proptest! {
        /// Property: Inverting twice restores the original picture.
        #[test]
        fn prop_invert_is_involution(img in picture_strategy()) {
            let mut engine = TransformEngine::new(img.clone());
            engine.invert();
            engine.invert();
            prop_assert_eq!(engine.picture(), &img);
        }

        /// Property: Grayscale output has equal channels everywhere.
        #[test]
        fn prop_grayscale_channels_equal(img in picture_strategy()) {
            let mut engine = TransformEngine::new(img);
            engine.grayscale();
            for px in engine.picture().pixels() {
                prop_assert!(px.red == px.green && px.green == px.blue);
            }
        }

        /// Property: Grayscale value never exceeds the brightest channel.
        #[test]
        fn prop_grayscale_bounded_by_channels(img in picture_strategy()) {
            let original = img.clone();
            let mut engine = TransformEngine::new(img);
            engine.grayscale();
            for (before, after) in original.pixels().iter().zip(engine.picture().pixels()) {
                let max = before.red.max(before.green).max(before.blue);
                let min = before.red.min(before.green).min(before.blue);
                prop_assert!(after.red <= max && after.red >= min);
            }
        }
    }
}
