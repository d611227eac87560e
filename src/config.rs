//! Export settings and the character batch plan.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::encode::SpriteHeader;

/// How declared sprite sizes are chosen for a batch of images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportConfig {
    /// Declared width when `use_image_size` is off.
    pub sprite_width: i32,
    /// Declared height when `use_image_size` is off.
    pub sprite_height: i32,
    /// Declare each image's own size instead of the fixed export size.
    pub use_image_size: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sprite_width: 16,
            sprite_height: 32,
            use_image_size: false,
        }
    }
}

impl ExportConfig {
    /// Header to declare for an image of `image_width` x `image_height`.
    pub fn header_for(&self, image_width: u32, image_height: u32) -> SpriteHeader {
        if self.use_image_size {
            SpriteHeader::new(saturate(image_width), saturate(image_height))
        } else {
            SpriteHeader::new(self.sprite_width, self.sprite_height)
        }
    }
}

fn saturate(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// One animation state shared by every character in a [`Roster`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterState {
    pub name: String,
    /// Width of one frame.
    pub image_width: u32,
    /// Height of one frame.
    pub image_height: u32,
    /// Frames stacked vertically in the sheet.
    pub frames: u32,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            name: "Idle".into(),
            image_width: 32,
            image_height: 32,
            frames: 2,
        }
    }
}

impl CharacterState {
    pub fn sheet_height(&self) -> u32 {
        self.image_height.saturating_mul(self.frames)
    }
}

/// Every character crossed with every state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub characters: Vec<String>,
    pub states: Vec<CharacterState>,
}

/// One sheet to produce for a character state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportJob {
    /// `character_{name}_{state}`, used for the image file and the array name.
    pub base_name: String,
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub header: SpriteHeader,
}

impl ExportJob {
    /// File name of the exported image.
    pub fn png_file_name(&self) -> String {
        format!("{}.png", self.base_name)
    }
}

impl Roster {
    /// Jobs in character-major, then state order.
    pub fn jobs(&self, config: &ExportConfig) -> Vec<ExportJob> {
        let mut jobs = Vec::with_capacity(self.characters.len() * self.states.len());
        for character in &self.characters {
            for state in &self.states {
                let sheet_width = state.image_width;
                let sheet_height = state.sheet_height();
                jobs.push(ExportJob {
                    base_name: format!("character_{character}_{}", state.name),
                    sheet_width,
                    sheet_height,
                    header: config.header_for(sheet_width, sheet_height),
                });
            }
        }
        jobs
    }
}
