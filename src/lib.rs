//! # zensprite
//!
//! Packed 1-bit sprite encoder for page-addressed monochrome displays
//! (Arduboy2, SSD1306 and friends).
//!
//! ## Output layout
//!
//! The image is cut into horizontal pages of 8 rows. Each page becomes one
//! byte per column, left to right; bit 0 is the topmost row of the page.
//! Pages follow top to bottom, so a `W x H` image packs into
//! `ceil(H / 8) * W` bytes. The firmware header is two values, the declared
//! sprite width and height.
//!
//! A pixel is lit when any of its red, green or blue components exceeds
//! 0.2 on a `[0, 1]` scale (see [`is_lit`]).
//!
//! ## Non-Goals
//!
//! - Grayscale or color output, any bit depth other than 1
//! - Compression (RLE, delta)
//! - Image decoding (bring pixels via [`RawPixels`], `imgref`, or your own
//!   [`PixelSource`])
//!
//! ## Usage
//!
//! ```
//! use zensprite::{EncodeRequest, PixelLayout, RawPixels, Unstoppable};
//!
//! // 16x16 white square
//! let pixels = [255u8; 16 * 16];
//! let source = RawPixels::new(&pixels, 16, 16, PixelLayout::Gray8)?;
//!
//! let sprite = EncodeRequest::new(16, 16).encode(&source, Unstoppable)?;
//! assert_eq!(sprite.bytes().len(), 32);
//!
//! let c_source = sprite.annotate("square")?;
//! assert!(c_source.starts_with("const unsigned char PROGMEM square[] ="));
//! # Ok::<(), zensprite::SpriteError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod annotate;
mod bitplane;
mod config;
mod encode;
mod error;
mod limits;
mod page;
mod pixel;
mod sheet;
mod threshold;

#[cfg(feature = "rgb")]
mod typed;

// Re-exports
pub use annotate::{is_c_identifier, sanitize_identifier};
pub use bitplane::BitPlane;
pub use config::{CharacterState, ExportConfig, ExportJob, Roster};
pub use encode::{EncodeRequest, EncodedSprite, SpriteHeader, encode};
pub use enough::{Stop, Unstoppable};
pub use error::SpriteError;
pub use limits::Limits;
pub use page::{PAGE_HEIGHT, PagePadding, RowOrigin, page_count};
pub use pixel::{PixelLayout, PixelSource, RawPixels};
pub use sheet::{HeaderMode, SpriteSheet};
pub use threshold::{DEFAULT_THRESHOLD, Threshold, is_lit};

#[cfg(feature = "rgb")]
pub use typed::{SourcePixel, TypedPixels};
