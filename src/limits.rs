use crate::error::SpriteError;

/// Caps on source size and packed output, checked before any allocation.
///
/// All fields default to `None` (no limit). A value equal to its cap passes.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the packed page data in bytes.
    pub max_output_bytes: Option<u64>,
}

fn within(what: &str, value: u64, cap: Option<u64>) -> Result<(), SpriteError> {
    match cap {
        Some(cap) if value > cap => Err(SpriteError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {cap}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check source dimensions.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), SpriteError> {
        let (width, height) = (u64::from(width), u64::from(height));
        within("width", width, self.max_width)?;
        within("height", height, self.max_height)?;
        within("pixel count", width * height, self.max_pixels)
    }

    /// Check the packed output size.
    pub(crate) fn check_output(&self, bytes: usize) -> Result<(), SpriteError> {
        within("output bytes", bytes as u64, self.max_output_bytes)
    }
}
