use crate::error::SpriteError;

/// Pixel memory layout of a raw source buffer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA. Alpha is ignored.
    Rgba8,
    /// 3 channels, 8-bit BGR.
    Bgr8,
    /// 4 channels, 8-bit BGRA. Alpha is ignored.
    Bgra8,
    /// 3 channels, 32-bit float RGB (native endian), nominally in [0, 1].
    RgbF32,
    /// 4 channels, 32-bit float RGBA (native endian). Alpha is ignored.
    RgbaF32,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 | Self::Bgr8 => 3,
            Self::Rgba8 | Self::Bgra8 => 4,
            Self::RgbF32 => 12,
            Self::RgbaF32 => 16,
        }
    }
}

/// Random-access RGB reads over a rectangular image.
///
/// Row 0 is the top of the image unless the encoder is told otherwise
/// (see [`crate::RowOrigin`]). Components are normalized to `[0, 1]`.
/// The encoder only queries `x < width()` and `y < height()`.
///
/// Any format conversion (decoding, making a texture readable, ...) belongs
/// to whoever builds the source, before encoding starts.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn rgb(&self, x: u32, y: u32) -> [f32; 3];
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
        (**self).rgb(x, y)
    }
}

/// A borrowed, tightly packed pixel buffer in one of the [`PixelLayout`]s.
#[derive(Clone, Copy, Debug)]
pub struct RawPixels<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
}

impl<'a> RawPixels<'a> {
    /// Wrap `pixels`, checking that the buffer covers `width * height` pixels.
    pub fn new(
        pixels: &'a [u8],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Self, SpriteError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
            .ok_or(SpriteError::DimensionsTooLarge { width, height })?;
        if pixels.len() < expected {
            return Err(SpriteError::BufferTooSmall {
                needed: expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels: &pixels[..expected],
            width,
            height,
            layout,
        })
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }
}

impl PixelSource for RawPixels<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
        let idx = y as usize * self.width as usize + x as usize;
        let off = idx * self.layout.bytes_per_pixel();
        let p = self.pixels;
        match self.layout {
            PixelLayout::Gray8 => {
                let g = unorm8(p[off]);
                [g, g, g]
            }
            PixelLayout::Rgb8 | PixelLayout::Rgba8 => {
                [unorm8(p[off]), unorm8(p[off + 1]), unorm8(p[off + 2])]
            }
            PixelLayout::Bgr8 | PixelLayout::Bgra8 => {
                [unorm8(p[off + 2]), unorm8(p[off + 1]), unorm8(p[off])]
            }
            PixelLayout::RgbF32 | PixelLayout::RgbaF32 => {
                [f32_at(p, off), f32_at(p, off + 4), f32_at(p, off + 8)]
            }
        }
    }
}

#[inline]
fn unorm8(v: u8) -> f32 {
    f32::from(v) / 255.0
}

#[inline]
fn f32_at(p: &[u8], off: usize) -> f32 {
    f32::from_ne_bytes([p[off], p[off + 1], p[off + 2], p[off + 3]])
}
