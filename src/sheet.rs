//! Several sprites in one text artifact.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};

use crate::encode::EncodedSprite;
use crate::error::SpriteError;

/// Lines written after every sprite block.
const BLOCK_SEPARATOR: &str = " \n \n \n";

/// How the sheet is wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderMode {
    /// Bare sprite blocks, to be pasted into an existing header.
    #[default]
    Individual,
    /// A self-contained `sprites.h` with include guard, `USE_ASSETS`
    /// defined and `Arduboy2.h` included.
    Combined,
}

/// Accumulates annotated sprite blocks in push order.
///
/// ```
/// use zensprite::{HeaderMode, PixelLayout, RawPixels, SpriteSheet, Unstoppable};
///
/// let pixels = [0u8; 8 * 8];
/// let source = RawPixels::new(&pixels, 8, 8, PixelLayout::Gray8)?;
/// let sprite = zensprite::encode(&source, 8, 8, Unstoppable)?;
///
/// let mut sheet = SpriteSheet::new(HeaderMode::Combined);
/// sheet.push("blank", &sprite)?;
/// let text = sheet.finish();
/// assert!(text.starts_with("#ifndef SPRITES_H\n"));
/// # Ok::<(), zensprite::SpriteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SpriteSheet {
    mode: HeaderMode,
    out: String,
    names: BTreeSet<String>,
}

impl SpriteSheet {
    pub fn new(mode: HeaderMode) -> Self {
        let mut out = String::new();
        if mode == HeaderMode::Combined {
            out.push_str("#ifndef SPRITES_H\n");
            out.push_str("#define SPRITES_H\n");
            out.push_str("#define USE_ASSETS\n");
            out.push('\n');
            out.push_str("#include <Arduboy2.h>\n");
        }
        Self {
            mode,
            out,
            names: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> HeaderMode {
        self.mode
    }

    /// Number of sprites pushed so far.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Append `sprite` as an array named `name`.
    ///
    /// Names must be unique within a sheet, since the C output would not
    /// compile otherwise. On error the sheet is left unchanged.
    pub fn push(&mut self, name: &str, sprite: &EncodedSprite) -> Result<(), SpriteError> {
        let block = sprite.annotate(name)?;
        if !self.names.insert(name.to_string()) {
            return Err(SpriteError::DuplicateName(name.to_string()));
        }
        self.out.push_str(&block);
        self.out.push_str(BLOCK_SEPARATOR);
        log::debug!("added sprite {name} ({} bytes) to sheet", sprite.bytes().len());
        Ok(())
    }

    /// Close the sheet and return its text.
    pub fn finish(mut self) -> String {
        if self.mode == HeaderMode::Combined {
            self.out.push_str("#endif // SPRITES_H\n");
        }
        self.out
    }
}
