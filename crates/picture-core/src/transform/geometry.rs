//! Lossless geometric remapping: quarter-turn rotations and mirror flips.
//!
//! Each operation is a bijection between source and destination cells, so
//! the destination is filled by walking the source once and writing each
//! pixel to its mapped coordinate.
//!
//! For a `width` x `height` source, pixel `(x, y)` lands at:
//!
//! ```text
//! rotate 90  (clockwise)  -> (height - 1 - y, x)           size height x width
//! rotate 180              -> (width - 1 - x, height - 1 - y) size width x height
//! rotate 270              -> rotate 180, then rotate 90
//! flip horizontal         -> (width - 1 - x, y)
//! flip vertical           -> (x, height - 1 - y)
//! ```

use tracing::debug;

use super::{TransformEngine, TransformError};
use crate::grid::PixelGrid;

impl TransformEngine {
    /// Rotate a quarter turn clockwise. Width and height swap.
    pub fn rotate90(&mut self) -> Result<(), TransformError> {
        debug!(dimensions = ?self.picture.dimensions(), "rotate90");
        let rotated = rotated_90(&self.picture)?;
        self.replace(rotated);
        Ok(())
    }

    /// Rotate a half turn.
    pub fn rotate180(&mut self) -> Result<(), TransformError> {
        debug!(dimensions = ?self.picture.dimensions(), "rotate180");
        let rotated = rotated_180(&self.picture)?;
        self.replace(rotated);
        Ok(())
    }

    /// Rotate three quarter turns clockwise, as a half turn followed by a
    /// quarter turn. Width and height swap.
    pub fn rotate270(&mut self) -> Result<(), TransformError> {
        debug!(dimensions = ?self.picture.dimensions(), "rotate270");
        let half = rotated_180(&self.picture)?;
        let rotated = rotated_90(&half)?;
        self.replace(rotated);
        Ok(())
    }

    /// Mirror across the vertical axis.
    pub fn flip_horizontal(&mut self) -> Result<(), TransformError> {
        debug!(dimensions = ?self.picture.dimensions(), "flip horizontal");
        let (width, height) = self.picture.dimensions();
        let flipped = remap(&self.picture, (width, height), |x, y| (width - 1 - x, y))?;
        self.replace(flipped);
        Ok(())
    }

    /// Mirror across the horizontal axis.
    pub fn flip_vertical(&mut self) -> Result<(), TransformError> {
        debug!(dimensions = ?self.picture.dimensions(), "flip vertical");
        let (width, height) = self.picture.dimensions();
        let flipped = remap(&self.picture, (width, height), |x, y| (x, height - 1 - y))?;
        self.replace(flipped);
        Ok(())
    }
}

fn rotated_90(src: &PixelGrid) -> Result<PixelGrid, TransformError> {
    let (width, height) = src.dimensions();
    remap(src, (height, width), |x, y| (height - 1 - y, x))
}

fn rotated_180(src: &PixelGrid) -> Result<PixelGrid, TransformError> {
    let (width, height) = src.dimensions();
    remap(src, (width, height), |x, y| (width - 1 - x, height - 1 - y))
}

/// Copy every source pixel to `map(x, y)` in a new `dst_width` x `dst_height`
/// picture.
fn remap(
    src: &PixelGrid,
    (dst_width, dst_height): (u32, u32),
    map: impl Fn(u32, u32) -> (u32, u32),
) -> Result<PixelGrid, TransformError> {
    let mut dst = PixelGrid::allocate(dst_width, dst_height)?;
    for y in 0..src.height() {
        for x in 0..src.width() {
            let (dst_x, dst_y) = map(x, y);
            dst.set(dst_x, dst_y, src.get(x, y)?)?;
        }
    }
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::gradient;
    use super::*;
    use crate::color::Color;
    use crate::grid::GridError;

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);
    const BLUE: Color = Color::new(0, 0, 255);
    const YELLOW: Color = Color::new(255, 255, 0);

    /// 2x2 picture:
    /// ```text
    /// R G
    /// B Y
    /// ```
    fn quad() -> PixelGrid {
        let mut img = PixelGrid::allocate(2, 2).unwrap();
        img.set(0, 0, RED).unwrap();
        img.set(1, 0, GREEN).unwrap();
        img.set(0, 1, BLUE).unwrap();
        img.set(1, 1, YELLOW).unwrap();
        img
    }

    fn row(colors: &[Color]) -> PixelGrid {
        let mut img = PixelGrid::allocate(colors.len() as u32, 1).unwrap();
        for (x, &c) in colors.iter().enumerate() {
            img.set(x as u32, 0, c).unwrap();
        }
        img
    }

    #[test]
    fn test_rotate90_clockwise() {
        let mut engine = TransformEngine::new(quad());
        engine.rotate90().unwrap();

        // B R
        // Y G
        let result = engine.picture();
        assert_eq!(result.get(0, 0).unwrap(), BLUE);
        assert_eq!(result.get(1, 0).unwrap(), RED);
        assert_eq!(result.get(0, 1).unwrap(), YELLOW);
        assert_eq!(result.get(1, 1).unwrap(), GREEN);
    }

    #[test]
    fn test_rotate90_is_not_transpose() {
        // A horizontal strip rotated clockwise reads top to bottom
        let mut engine = TransformEngine::new(row(&[RED, GREEN, BLUE]));
        engine.rotate90().unwrap();

        let result = engine.picture();
        assert_eq!(result.dimensions(), (1, 3));
        assert_eq!(result.get(0, 0).unwrap(), RED);
        assert_eq!(result.get(0, 2).unwrap(), BLUE);

        // The transpose would keep (0, 0) in place; a clockwise turn moves
        // it to the top-right corner.
        let src = gradient(3, 2);
        let mut engine = TransformEngine::new(src.clone());
        engine.rotate90().unwrap();
        let result = engine.picture();
        assert_eq!(result.dimensions(), (2, 3));
        assert_eq!(result.get(1, 0).unwrap(), src.get(0, 0).unwrap());
        assert_eq!(result.get(0, 0).unwrap(), src.get(0, 1).unwrap());
    }

    #[test]
    fn test_rotate90_swaps_dimensions() {
        let mut engine = TransformEngine::new(gradient(5, 3));
        engine.rotate90().unwrap();
        assert_eq!(engine.picture().dimensions(), (3, 5));
    }

    #[test]
    fn test_rotate180() {
        let mut engine = TransformEngine::new(quad());
        engine.rotate180().unwrap();

        // Y B
        // G R
        let result = engine.picture();
        assert_eq!(result.get(0, 0).unwrap(), YELLOW);
        assert_eq!(result.get(1, 0).unwrap(), BLUE);
        assert_eq!(result.get(0, 1).unwrap(), GREEN);
        assert_eq!(result.get(1, 1).unwrap(), RED);
    }

    #[test]
    fn test_rotate270_counter_clockwise() {
        let mut engine = TransformEngine::new(quad());
        engine.rotate270().unwrap();

        // G Y
        // R B
        let result = engine.picture();
        assert_eq!(result.get(0, 0).unwrap(), GREEN);
        assert_eq!(result.get(1, 0).unwrap(), YELLOW);
        assert_eq!(result.get(0, 1).unwrap(), RED);
        assert_eq!(result.get(1, 1).unwrap(), BLUE);
    }

    #[test]
    fn test_rotate270_dimensions() {
        let mut engine = TransformEngine::new(gradient(6, 2));
        engine.rotate270().unwrap();
        assert_eq!(engine.picture().dimensions(), (2, 6));
    }

    #[test]
    fn test_flip_horizontal() {
        let mut engine = TransformEngine::new(row(&[RED, GREEN, BLUE]));
        engine.flip_horizontal().unwrap();
        assert_eq!(engine.picture(), &row(&[BLUE, GREEN, RED]));
    }

    #[test]
    fn test_flip_vertical() {
        let mut engine = TransformEngine::new(quad());
        engine.flip_vertical().unwrap();

        // B Y
        // R G
        let result = engine.picture();
        assert_eq!(result.get(0, 0).unwrap(), BLUE);
        assert_eq!(result.get(1, 0).unwrap(), YELLOW);
        assert_eq!(result.get(0, 1).unwrap(), RED);
        assert_eq!(result.get(1, 1).unwrap(), GREEN);
    }

    #[test]
    fn test_single_pixel_unchanged() {
        let img = row(&[RED]);
        let mut engine = TransformEngine::new(img.clone());
        engine.rotate90().unwrap();
        engine.rotate180().unwrap();
        engine.rotate270().unwrap();
        engine.flip_horizontal().unwrap();
        engine.flip_vertical().unwrap();
        assert_eq!(engine.picture(), &img);
    }

    #[test]
    fn test_rotate_empty_picture_fails_without_change() {
        let mut engine = TransformEngine::new(PixelGrid::empty());
        let result = engine.rotate90();
        assert!(matches!(
            result,
            Err(TransformError::Grid(GridError::InvalidDimension { .. }))
        ));
        assert!(engine.picture().is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
