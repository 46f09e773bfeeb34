//! Operations that combine the held picture with additional pictures.
//!
//! Both operations treat the held picture followed by `others` as one ordered
//! list of sources, and both size their output to the smallest width and the
//! smallest height among those sources.

use std::iter;
use std::num::NonZeroU32;

use tracing::{debug, warn};

use super::dimensions::{min_dimensions, trim_to_tile};
use super::{TransformEngine, TransformError};
use crate::color::ChannelSum;
use crate::grid::PixelGrid;

impl TransformEngine {
    /// Average the held picture with `others`.
    ///
    /// Each output channel is the sum of that channel over all `N` sources,
    /// divided once by `N` with truncation. The output covers the region
    /// shared by every source.
    pub fn blend(&mut self, others: &[PixelGrid]) -> Result<(), TransformError> {
        let sources: Vec<&PixelGrid> = iter::once(&self.picture).chain(others).collect();
        let (width, height) = min_dimensions(self.picture.dimensions(), others);
        debug!(sources = sources.len(), width, height, "blend");

        if width == 0 || height == 0 {
            warn!("blend sources share no pixels, result is empty");
            self.replace(PixelGrid::empty());
            return Ok(());
        }

        let count = sources.len() as u32;
        let mut dst = PixelGrid::allocate(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let sum = sources
                    .iter()
                    .map(|src| src.get(x, y))
                    .collect::<Result<ChannelSum, _>>()?;
                dst.set(x, y, sum.divide(count))?;
            }
        }

        self.replace(dst);
        Ok(())
    }

    /// Tile the held picture and `others` into a diagonal mosaic.
    ///
    /// The output is cut into `tile_size` x `tile_size` squares after both
    /// dimensions are rounded down to a multiple of `tile_size`. The tile at
    /// tile-row `r`, tile-column `c` is copied from source `(r + c) mod N`
    /// at the same coordinates.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidTileSize` if `tile_size` is zero.
    pub fn mosaic(&mut self, tile_size: u32, others: &[PixelGrid]) -> Result<(), TransformError> {
        let tile = NonZeroU32::new(tile_size).ok_or(TransformError::InvalidTileSize)?;
        let sources: Vec<&PixelGrid> = iter::once(&self.picture).chain(others).collect();
        let (width, height) = trim_to_tile(min_dimensions(self.picture.dimensions(), others), tile);
        debug!(sources = sources.len(), tile_size, width, height, "mosaic");

        if width == 0 || height == 0 {
            warn!(tile_size, "mosaic sources are smaller than one tile, result is empty");
            self.replace(PixelGrid::empty());
            return Ok(());
        }

        let mut dst = PixelGrid::allocate(width, height)?;
        for (row, tile_y) in (0..height).step_by(tile_size as usize).enumerate() {
            for (col, tile_x) in (0..width).step_by(tile_size as usize).enumerate() {
                let src = sources[(row + col) % sources.len()];
                copy_tile(src, &mut dst, tile_x, tile_y, tile_size)?;
            }
        }

        self.replace(dst);
        Ok(())
    }
}

/// Copy the `size` x `size` square at `(left, top)` from `src` into `dst`.
fn copy_tile(
    src: &PixelGrid,
    dst: &mut PixelGrid,
    left: u32,
    top: u32,
    size: u32,
) -> Result<(), TransformError> {
    for y in top..top + size {
        for x in left..left + size {
            dst.set(x, y, src.get(x, y)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{gradient, solid};
    use super::*;
    use crate::color::Color;

    const A: Color = Color::new(255, 0, 0);
    const B: Color = Color::new(0, 255, 0);
    const C: Color = Color::new(0, 0, 255);

    /// Color of the top-left pixel of every tile, indexed `[row][col]`.
    fn tile_colors(img: &PixelGrid, tile_size: u32) -> Vec<Vec<Color>> {
        (0..img.height())
            .step_by(tile_size as usize)
            .map(|y| {
                (0..img.width())
                    .step_by(tile_size as usize)
                    .map(|x| img.get(x, y).unwrap())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_blend_no_others_is_copy() {
        let img = gradient(6, 4);
        let mut engine = TransformEngine::new(img.clone());
        engine.blend(&[]).unwrap();
        assert_eq!(engine.picture(), &img);
    }

    #[test]
    fn test_blend_with_itself_unchanged() {
        let img = gradient(6, 4);
        let mut engine = TransformEngine::new(img.clone());
        engine.blend(&[img.clone()]).unwrap();
        assert_eq!(engine.picture(), &img);
    }

    #[test]
    fn test_blend_averages_and_truncates() {
        let mut engine = TransformEngine::new(solid(2, 2, Color::new(10, 0, 255)));
        let others = [
            solid(2, 2, Color::new(11, 1, 255)),
            solid(2, 2, Color::new(12, 1, 254)),
        ];
        engine.blend(&others).unwrap();

        // (10 + 11 + 12) / 3 = 11, (0 + 1 + 1) / 3 = 0, (255 + 255 + 254) / 3 = 254
        let expected = Color::new(11, 0, 254);
        assert!(engine.picture().pixels().iter().all(|&c| c == expected));
    }

    #[test]
    fn test_blend_sums_before_dividing() {
        let mut engine = TransformEngine::new(solid(1, 1, Color::new(9, 0, 0)));
        let others = [solid(1, 1, Color::BLACK), solid(1, 1, Color::BLACK)];
        engine.blend(&others).unwrap();
        // Summed then divided: 9 / 3 = 3. A running average would give
        // ((9 + 0) / 2 + 0) / 2 = 2.
        assert_eq!(engine.picture().get(0, 0).unwrap(), Color::new(3, 0, 0));
    }

    #[test]
    fn test_blend_dimensions_are_minimum() {
        let mut engine = TransformEngine::new(gradient(5, 5));
        engine.blend(&[gradient(3, 7)]).unwrap();
        assert_eq!(engine.picture().dimensions(), (3, 5));
    }

    #[test]
    fn test_blend_reads_same_coordinates() {
        let first = gradient(4, 4);
        let second = gradient(2, 2);
        let mut engine = TransformEngine::new(first.clone());
        engine.blend(&[second.clone()]).unwrap();

        let a = first.get(1, 1).unwrap();
        let b = second.get(1, 1).unwrap();
        let expected = Color::new(
            ((a.red as u32 + b.red as u32) / 2) as u8,
            ((a.green as u32 + b.green as u32) / 2) as u8,
            ((a.blue as u32 + b.blue as u32) / 2) as u8,
        );
        assert_eq!(engine.picture().get(1, 1).unwrap(), expected);
    }

    #[test]
    fn test_blend_with_empty_source_is_empty() {
        let mut engine = TransformEngine::new(gradient(4, 4));
        engine.blend(&[PixelGrid::empty()]).unwrap();
        assert!(engine.picture().is_empty());
    }

    #[test]
    fn test_mosaic_diagonal_pattern() {
        let mut engine = TransformEngine::new(solid(4, 4, A));
        engine.mosaic(2, &[solid(4, 4, B), solid(4, 4, C)]).unwrap();

        let result = engine.picture();
        assert_eq!(result.dimensions(), (4, 4));
        assert_eq!(tile_colors(result, 2), vec![vec![A, B], vec![B, C]]);
    }

    #[test]
    fn test_mosaic_tiles_are_whole() {
        let mut engine = TransformEngine::new(solid(4, 4, A));
        engine.mosaic(2, &[solid(4, 4, B), solid(4, 4, C)]).unwrap();

        let result = engine.picture();
        // Tile (row 1, col 1) covers x, y in 2..4
        for y in 2..4 {
            for x in 2..4 {
                assert_eq!(result.get(x, y).unwrap(), C);
            }
        }
        assert_eq!(result.get(1, 1).unwrap(), A);
        assert_eq!(result.get(2, 1).unwrap(), B);
    }

    #[test]
    fn test_mosaic_wraps_sources() {
        let mut engine = TransformEngine::new(solid(6, 6, A));
        engine.mosaic(2, &[solid(6, 6, B)]).unwrap();

        // Checkerboard with two sources
        assert_eq!(
            tile_colors(engine.picture(), 2),
            vec![vec![A, B, A], vec![B, A, B], vec![A, B, A]]
        );
    }

    #[test]
    fn test_mosaic_trims_to_tile_multiple() {
        let mut engine = TransformEngine::new(solid(11, 9, A));
        engine.mosaic(3, &[solid(10, 20, B)]).unwrap();
        // min (10, 9) trimmed to (9, 9)
        assert_eq!(engine.picture().dimensions(), (9, 9));
    }

    #[test]
    fn test_mosaic_copies_absolute_coordinates() {
        let first = gradient(4, 4);
        let second = gradient(8, 8);
        let mut engine = TransformEngine::new(first.clone());
        engine.mosaic(2, &[second.clone()]).unwrap();

        let result = engine.picture();
        // Tile (0, 1) comes from the second source at the same position
        assert_eq!(result.get(3, 1).unwrap(), second.get(3, 1).unwrap());
        // Tile (1, 1) wraps back to the first source
        assert_eq!(result.get(3, 3).unwrap(), first.get(3, 3).unwrap());
    }

    #[test]
    fn test_mosaic_single_source_is_trimmed_copy() {
        let img = gradient(5, 4);
        let mut engine = TransformEngine::new(img.clone());
        engine.mosaic(2, &[]).unwrap();

        let result = engine.picture();
        assert_eq!(result.dimensions(), (4, 4));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(result.get(x, y).unwrap(), img.get(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_mosaic_smaller_than_tile_is_empty() {
        let mut engine = TransformEngine::new(solid(8, 8, A));
        engine.mosaic(4, &[solid(3, 8, B)]).unwrap();
        assert!(engine.picture().is_empty());
    }

    #[test]
    fn test_mosaic_zero_tile_rejected() {
        let img = solid(4, 4, A);
        let mut engine = TransformEngine::new(img.clone());
        assert_eq!(engine.mosaic(0, &[]), Err(TransformError::InvalidTileSize));
        assert_eq!(engine.picture(), &img);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
