//! C source rendering of an encoded sprite.
//!
//! ```text
//! const unsigned char PROGMEM player[] =
//! {
//! #ifdef USE_ASSETS
//! // width, height
//! 16, 16,
//! // TILE 00
//! 0xff, 0xff, ... 0xff,
//! 0xff, 0xff, ... 0xff,
//! #endif
//! };
//! ```
//!
//! One line per page. `// TILE NN` comments split the lines into square
//! tiles of `width / 8` pages; they never change the bytes.

use alloc::string::{String, ToString};
use core::fmt::Write as _;

use crate::encode::EncodedSprite;
use crate::error::SpriteError;

/// Whether `name` can be used as a C array name.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Map an arbitrary string (a file stem, a character name) to a C identifier.
pub fn sanitize_identifier(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if !out.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        out.insert(0, '_');
    }
    out
}

pub(crate) fn sprite_block(name: &str, sprite: &EncodedSprite) -> Result<String, SpriteError> {
    if !is_c_identifier(name) {
        return Err(SpriteError::InvalidName(name.to_string()));
    }

    let width = sprite.width() as usize;
    //"0x00, " per byte plus a newline per page, and some slack for the frame
    let mut out = String::with_capacity(sprite.bytes().len() * 6 + sprite.pages() as usize + 128);

    // Writing to a String cannot fail.
    let _ = writeln!(out, "const unsigned char PROGMEM {name}[] =");
    out.push_str("{\n");
    out.push_str("#ifdef USE_ASSETS\n");
    out.push_str("// width, height\n");
    let header = sprite.header();
    let _ = writeln!(out, "{}, {},", header.width, header.height);
    out.push_str("// TILE 00\n");

    let pages_per_tile = sprite.width() / 8;
    let tile_count = sprite.height() / sprite.width();
    let mut row_counter = 0u32;
    let mut tile_counter = 0u32;
    for page in sprite.bytes().chunks_exact(width) {
        for byte in page {
            let _ = write!(out, "0x{byte:02x}, ");
        }
        out.push('\n');
        row_counter += 1;
        if row_counter == pages_per_tile && tile_counter + 1 < tile_count {
            tile_counter += 1;
            let _ = writeln!(out, "// TILE {tile_counter:02}");
            row_counter = 0;
        }
    }

    out.push_str("#endif\n");
    out.push_str("};\n");
    log::trace!("rendered sprite {name}: {} tile marker(s)", tile_counter + 1);
    Ok(out)
}
