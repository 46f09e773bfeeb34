//! Output size computation shared by the multi-source operations.

use std::num::NonZeroU32;

use crate::grid::PixelGrid;

/// Smallest width and smallest height over `base` and every picture in
/// `others`.
///
/// The two minima are taken independently, so the result may be narrower
/// than one source and shorter than another.
pub fn min_dimensions<'a, I>(base: (u32, u32), others: I) -> (u32, u32)
where
    I: IntoIterator<Item = &'a PixelGrid>,
{
    others
        .into_iter()
        .fold(base, |(width, height), picture| {
            (width.min(picture.width()), height.min(picture.height()))
        })
}

/// Round each dimension down to the nearest multiple of `tile_size`.
pub fn trim_to_tile((width, height): (u32, u32), tile_size: NonZeroU32) -> (u32, u32) {
    let tile = tile_size.get();
    (width - width % tile, height - height % tile)
}
