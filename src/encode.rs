use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;

use crate::annotate;
use crate::bitplane::BitPlane;
use crate::error::SpriteError;
use crate::limits::Limits;
use crate::page::{self, PAGE_HEIGHT, PagePadding, RowOrigin};
use crate::pixel::PixelSource;
use crate::threshold::Threshold;

/// Sprite size written ahead of the pixel data.
///
/// These are the dimensions the firmware will draw with. They are taken as
/// given and never compared with the encoded image: a sheet holding several
/// frames stacked vertically is usually declared with the size of one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteHeader {
    pub width: i32,
    pub height: i32,
}

impl SpriteHeader {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub(crate) fn validate(self) -> Result<Self, SpriteError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SpriteError::InvalidDeclaredSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Builder for a sprite encode.
///
/// ```
/// use zensprite::{EncodeRequest, PixelLayout, RawPixels, Unstoppable};
///
/// let pixels = [255u8; 8 * 8];
/// let source = RawPixels::new(&pixels, 8, 8, PixelLayout::Gray8)?;
/// let sprite = EncodeRequest::new(8, 8).encode(&source, Unstoppable)?;
/// assert_eq!(sprite.bytes(), &[0xff; 8]);
/// # Ok::<(), zensprite::SpriteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    header: SpriteHeader,
    threshold: Threshold,
    origin: RowOrigin,
    padding: PagePadding,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    /// Encode with the given declared sprite size.
    pub fn new(declared_width: i32, declared_height: i32) -> Self {
        Self::with_header(SpriteHeader::new(declared_width, declared_height))
    }

    pub fn with_header(header: SpriteHeader) -> Self {
        Self {
            header,
            threshold: Threshold::default(),
            origin: RowOrigin::default(),
            padding: PagePadding::default(),
            limits: None,
        }
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_origin(mut self, origin: RowOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_padding(mut self, padding: PagePadding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Binarize `source` and pack it into page-major column bytes.
    pub fn encode<S: PixelSource + ?Sized>(
        &self,
        source: &S,
        stop: impl Stop,
    ) -> Result<EncodedSprite, SpriteError> {
        let header = self.header.validate()?;
        let width = source.width();
        let height = source.height();
        if width == 0 || height == 0 {
            return Err(SpriteError::InvalidDimension { width, height });
        }
        if self.padding == PagePadding::Reject && height % PAGE_HEIGHT != 0 {
            return Err(SpriteError::UnalignedHeight { height });
        }

        let pages = page::page_count(height);
        if let Some(limits) = self.limits {
            limits.check(width, height)?;
            limits.check_output((pages as usize).saturating_mul(width as usize))?;
        }

        stop.check()?;
        let plane = BitPlane::from_source(source, self.threshold, self.origin, &stop)?;
        let bytes = page::pack_pages(&plane, &stop)?;
        log::debug!(
            "encoded {width}x{height} source as {pages} page(s), {} bytes, {} lit, declared {}x{}",
            bytes.len(),
            plane.lit_count(),
            header.width,
            header.height
        );

        Ok(EncodedSprite {
            header,
            width,
            height,
            pages,
            bytes,
        })
    }
}

/// Encode `source` with default options.
pub fn encode<S: PixelSource + ?Sized>(
    source: &S,
    declared_width: i32,
    declared_height: i32,
    stop: impl Stop,
) -> Result<EncodedSprite, SpriteError> {
    EncodeRequest::new(declared_width, declared_height).encode(source, stop)
}

/// Packed sprite data and the dimensions it was produced from.
///
/// Only produced by a successful encode, so `bytes().len()` is always
/// `pages() * width()` and the header is positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedSprite {
    header: SpriteHeader,
    width: u32,
    height: u32,
    pages: u32,
    bytes: Vec<u8>,
}

impl EncodedSprite {
    pub fn header(&self) -> SpriteHeader {
        self.header
    }

    /// Source image width (bytes per page).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Source image height.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Page data, without the header.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Header as two bytes followed by page data, as the firmware reads it.
    ///
    /// Fails with [`SpriteError::InvalidDeclaredSize`] when the declared
    /// size does not fit in a byte.
    pub fn to_firmware_bytes(&self) -> Result<Vec<u8>, SpriteError> {
        let invalid = || SpriteError::InvalidDeclaredSize {
            width: self.header.width,
            height: self.header.height,
        };
        let width = u8::try_from(self.header.width).map_err(|_| invalid())?;
        let height = u8::try_from(self.header.height).map_err(|_| invalid())?;
        let mut out = Vec::with_capacity(self.bytes.len() + 2);
        out.push(width);
        out.push(height);
        out.extend_from_slice(&self.bytes);
        Ok(out)
    }

    /// One page (row of column bytes).
    pub fn page(&self, index: u32) -> Option<&[u8]> {
        let w = self.width as usize;
        let start = (index as usize).checked_mul(w)?;
        self.bytes.get(start..start.checked_add(w)?)
    }

    /// Render as a `PROGMEM` array named `name`.
    pub fn annotate(&self, name: &str) -> Result<String, SpriteError> {
        annotate::sprite_block(name, self)
    }
}
