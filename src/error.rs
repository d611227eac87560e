//! Error type for the encoder, the text renderer and the sprite sheet.

use alloc::string::String;
use enough::StopReason;

/// Errors from sprite encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpriteError {
    /// The source image has zero width or height.
    #[error("invalid source dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// The declared size is not positive, or does not fit the firmware header.
    #[error("invalid declared sprite size: {width}x{height}")]
    InvalidDeclaredSize { width: i32, height: i32 },

    /// [`PagePadding::Reject`](crate::PagePadding::Reject) was requested and
    /// the source height is not a multiple of 8.
    #[error("height {height} is not a multiple of the 8-row page height")]
    UnalignedHeight { height: u32 },

    /// A buffer size computed from the dimensions overflows `usize`.
    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// A raw pixel buffer is shorter than its layout and dimensions require.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// The array name is not a C identifier.
    #[error("invalid sprite name: {0:?}")]
    InvalidName(String),

    /// The array name is already used in the same sheet.
    #[error("duplicate sprite name: {0:?}")]
    DuplicateName(String),

    /// A [`Limits`](crate::Limits) cap was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// The stop token fired.
    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for SpriteError {
    fn from(r: StopReason) -> Self {
        SpriteError::Cancelled(r)
    }
}
