//! Binarization: which pixels light up on a monochrome display.

/// Channel value above which a pixel counts as lit.
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Per-channel cut-off for [`is_lit`].
///
/// A pixel is lit when *any* of its red, green or blue components is
/// strictly greater than the threshold. This is not a luminance test:
/// a dim pure blue at 0.21 is lit, a gray at exactly 0.2 is not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold(pub f32);

impl Default for Threshold {
    fn default() -> Self {
        Threshold(DEFAULT_THRESHOLD)
    }
}

impl Threshold {
    #[inline]
    pub fn is_lit(self, r: f32, g: f32, b: f32) -> bool {
        r > self.0 || g > self.0 || b > self.0
    }
}

/// [`Threshold::is_lit`] with the default threshold of 0.2.
#[inline]
pub fn is_lit(r: f32, g: f32, b: f32) -> bool {
    Threshold::default().is_lit(r, g, b)
}
