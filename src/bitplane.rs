//! Binarized copy of a pixel source.

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::SpriteError;
use crate::page::RowOrigin;
use crate::pixel::PixelSource;
use crate::threshold::Threshold;

/// One boolean per source pixel, stored top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitPlane {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BitPlane {
    /// Apply `threshold` to every pixel of `source`.
    ///
    /// With [`RowOrigin::BottomUp`] the source's row 0 is the bottom of the
    /// image; the plane is flipped so that its row 0 is always the top.
    pub fn from_source<S: PixelSource + ?Sized>(
        source: &S,
        threshold: Threshold,
        origin: RowOrigin,
        stop: &dyn Stop,
    ) -> Result<Self, SpriteError> {
        let width = source.width();
        let height = source.height();
        if width == 0 || height == 0 {
            return Err(SpriteError::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(SpriteError::DimensionsTooLarge { width, height })?;

        let mut bits = vec![false; len];
        for (y, row) in bits.chunks_exact_mut(width as usize).enumerate() {
            if y % 16 == 0 {
                stop.check()?;
            }
            let src_y = match origin {
                RowOrigin::TopDown => y as u32,
                RowOrigin::BottomUp => height - 1 - y as u32,
            };
            for (x, bit) in row.iter_mut().enumerate() {
                let [r, g, b] = source.rgb(x as u32, src_y);
                *bit = threshold.is_lit(r, g, b);
            }
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at column `x`, row `y` (from the top) is lit.
    /// Rows past the bottom read as unlit.
    #[inline]
    pub fn is_lit(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}
