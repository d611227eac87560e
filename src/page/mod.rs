//! Page-major packing for 8-row-per-byte display controllers (internal).
//!
//! The display is addressed as horizontal pages of 8 rows. Each page is
//! stored as one byte per column, left to right, with bit 0 holding the
//! topmost row of the page. Pages follow each other top to bottom.

mod pack;

pub(crate) use pack::pack_pages;

/// Rows per page (bits per column byte).
pub const PAGE_HEIGHT: u32 = 8;

/// Which end of the source image its row 0 refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowOrigin {
    /// Row 0 is the top row (PNG, `image`, `imgref`).
    #[default]
    TopDown,
    /// Row 0 is the bottom row (game-engine textures, bottom-up BMP).
    BottomUp,
}

/// What to do when the image height is not a multiple of [`PAGE_HEIGHT`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PagePadding {
    /// Rows past the bottom of the image are encoded as unlit.
    #[default]
    Unlit,
    /// Fail with [`crate::SpriteError::UnalignedHeight`].
    Reject,
}

/// Number of pages needed to cover `height` rows.
pub fn page_count(height: u32) -> u32 {
    height.div_ceil(PAGE_HEIGHT)
}
