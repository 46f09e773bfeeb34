//! Box blur over the 3x3 neighborhood.
//!
//! Only interior cells are filtered. Cells on any edge of the picture are
//! copied unchanged; there is no clamping or wrap-around at the border.

use tracing::debug;

use super::{TransformEngine, TransformError};
use crate::color::ChannelSum;
use crate::grid::PixelGrid;

/// Number of cells in the blur neighborhood.
const KERNEL_CELLS: u32 = 9;

impl TransformEngine {
    /// Replace every interior pixel with the truncated mean of its 3x3
    /// neighborhood.
    pub fn blur(&mut self) -> Result<(), TransformError> {
        debug!(dimensions = ?self.picture.dimensions(), "blur");
        let blurred = box_blurred(&self.picture)?;
        self.replace(blurred);
        Ok(())
    }
}

fn box_blurred(src: &PixelGrid) -> Result<PixelGrid, TransformError> {
    let (width, height) = src.dimensions();
    let mut dst = PixelGrid::allocate(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let color = if is_on_edge(x, y, width, height) {
                src.get(x, y)?
            } else {
                neighborhood_sum(src, x, y)?.divide(KERNEL_CELLS)
            };
            dst.set(x, y, color)?;
        }
    }
    Ok(dst)
}

#[inline]
fn is_on_edge(x: u32, y: u32, width: u32, height: u32) -> bool {
    x == 0 || y == 0 || x == width - 1 || y == height - 1
}

/// Channel sum of the cell at `(x, y)` and its eight neighbors. The caller
/// guarantees `(x, y)` is interior.
fn neighborhood_sum(src: &PixelGrid, x: u32, y: u32) -> Result<ChannelSum, TransformError> {
    let mut sum = ChannelSum::new();
    for ny in y - 1..=y + 1 {
        for nx in x - 1..=x + 1 {
            sum.add(src.get(nx, ny)?);
        }
    }
    Ok(sum)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
