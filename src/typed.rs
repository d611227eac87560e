//! Typed `rgb` pixels as encoder input, and `imgref` buffers of them.
//!
//! 8-bit samples are normalized by 255; float samples are used as is.

#[cfg(feature = "imgref")]
use imgref::ImgRef;
use rgb::{RGB, RGB8, RGBA, RGBA8};

use crate::error::SpriteError;
use crate::pixel::PixelSource;

/// Pixel types that can feed the encoder.
pub trait SourcePixel: Copy {
    fn to_rgb_f32(self) -> [f32; 3];
}

impl SourcePixel for RGB8 {
    #[inline]
    fn to_rgb_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl SourcePixel for RGBA8 {
    #[inline]
    fn to_rgb_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl SourcePixel for RGB<f32> {
    #[inline]
    fn to_rgb_f32(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl SourcePixel for RGBA<f32> {
    #[inline]
    fn to_rgb_f32(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// A tightly packed slice of typed pixels, top row first.
#[derive(Clone, Copy, Debug)]
pub struct TypedPixels<'a, P> {
    pixels: &'a [P],
    width: u32,
    height: u32,
}

impl<'a, P: SourcePixel> TypedPixels<'a, P> {
    pub fn new(pixels: &'a [P], width: u32, height: u32) -> Result<Self, SpriteError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
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
        })
    }
}

impl<P: SourcePixel> PixelSource for TypedPixels<'_, P> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
        self.pixels[y as usize * self.width as usize + x as usize].to_rgb_f32()
    }
}

#[cfg(feature = "imgref")]
impl<P: SourcePixel> PixelSource for ImgRef<'_, P> {
    fn width(&self) -> u32 {
        u32::try_from(imgref::Img::width(self)).unwrap_or(u32::MAX)
    }

    fn height(&self) -> u32 {
        u32::try_from(imgref::Img::height(self)).unwrap_or(u32::MAX)
    }

    fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
        let idx = y as usize * self.stride() + x as usize;
        self.buf()[idx].to_rgb_f32()
    }
}
