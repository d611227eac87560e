use alloc::vec::Vec;
use enough::Stop;

use super::{PAGE_HEIGHT, page_count};
use crate::bitplane::BitPlane;
use crate::error::SpriteError;

/// Pack a bit plane into page-major column bytes.
///
/// Output length is `page_count(height) * width`.
pub(crate) fn pack_pages(plane: &BitPlane, stop: &dyn Stop) -> Result<Vec<u8>, SpriteError> {
    let width = plane.width();
    let pages = page_count(plane.height());
    let total = (pages as usize)
        .checked_mul(width as usize)
        .ok_or(SpriteError::DimensionsTooLarge {
            width,
            height: plane.height(),
        })?;

    let mut out = Vec::with_capacity(total);
    for page in 0..pages {
        stop.check()?;
        let top = page * PAGE_HEIGHT;
        for x in 0..width {
            let mut byte = 0u8;
            for bit in 0..PAGE_HEIGHT {
                if plane.is_lit(x, top + bit) {
                    byte |= 1 << bit;
                }
            }
            out.push(byte);
        }
    }
    debug_assert_eq!(out.len(), total);
    Ok(out)
}
