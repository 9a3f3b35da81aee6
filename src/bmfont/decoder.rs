//! Header validation and the tagged-block decode loop.
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────┐
//! │  B M F \x03      │ ← magic + version check
//! ├──────────────────┤
//! │  tag  size       │ ← u8 tag + i32 little-endian body size
//! │  body …          │ ← blocks::decode_* over a bounded sub-cursor
//! ├──────────────────┤
//! │  tag  size  body │ ← repeat until terminal block or end of buffer
//! └──────────────────┘
//! ```
//!
//! Well-formed files lay their blocks out as INFO, COMMON, PAGES, CHARS
//! and optionally KERNINGS, but the loop dispatches on each block's own
//! tag rather than assuming that order. The only ordering requirement
//! enforced is the structural one: PAGES needs the page count from a
//! previously decoded COMMON block.

use std::collections::HashMap;

use log::{debug, info};

use super::blocks;
use super::cursor::ByteCursor;
use super::types::error::{BmFontError, Result};
use super::types::models::{
    BlockType, CommonMetrics, FontFile, FontInfo, GlyphRecord, KerningMode, KerningPair, PageRef,
};

/// Magic prefix of every BMFont binary file.
const MAGIC: [u8; 3] = *b"BMF";

/// The only supported binary format version.
const SUPPORTED_VERSION: u8 = 3;

/// Decodes a complete BMFont binary buffer into a [`FontFile`].
///
/// The buffer must hold the full contents of a `.fnt` binary file;
/// obtaining it (from disk, network, or elsewhere) is the caller's
/// responsibility. The decoder only reads the buffer and copies all
/// variable-length text out, so the returned [`FontFile`] has no ties to
/// the input memory.
///
/// Under [`KerningMode::Without`] the CHARS block is terminal and a
/// kerning block tag is rejected as unknown; under [`KerningMode::With`]
/// an optional KERNINGS block may follow CHARS and is itself terminal.
/// Running out of buffer with no terminal block seen is success, with any
/// never-seen section left at its zeroed default.
///
/// # Errors
/// Returns an error if:
/// - The magic bytes or version byte do not match `BMF` version 3
/// - Any read or name scan would cross the end of the buffer or block
/// - A block arrives before a block it depends on
/// - A collection or glyph id exceeds its fixed bound
/// - A block tag is not recognised
pub fn decode(data: &[u8], mode: KerningMode) -> Result<FontFile> {
    info!("Decoding BMFont binary: {} bytes, mode {:?}", data.len(), mode);

    let mut cursor = ByteCursor::new(data);
    read_magic(&mut cursor)?;

    let mut font_info: Option<FontInfo> = None;
    let mut common: Option<CommonMetrics> = None;
    let mut pages: Vec<PageRef> = Vec::new();
    let mut glyphs: HashMap<u32, GlyphRecord> = HashMap::new();
    let mut kernings: Vec<KerningPair> = Vec::new();

    while !cursor.at_end() {
        let tag = cursor.read_u8()?;
        let block = BlockType::try_from(tag)?;
        let block_size = cursor.read_i32()?;

        // A negative declared size reinterprets as an impossible length
        // and fails the bounds check below.
        let body_len = block_size as u32 as usize;
        let body = cursor.peek_bytes(body_len)?;
        cursor.advance(body_len)?;
        let mut body_cursor = ByteCursor::new(body);
        debug!("Decoding {} block ({} bytes)", block, body_len);

        match block {
            BlockType::Info => font_info = Some(blocks::decode_info(&mut body_cursor)?),
            BlockType::Common => common = Some(blocks::decode_common(&mut body_cursor)?),
            BlockType::Pages => {
                let metrics = common.as_ref().ok_or(BmFontError::OutOfOrderBlock {
                    block: BlockType::Pages,
                    requires: BlockType::Common,
                })?;
                pages = blocks::decode_pages(&mut body_cursor, metrics.pages)?;
            }
            BlockType::Chars => {
                blocks::decode_chars(&mut body_cursor, &mut glyphs)?;
                if mode == KerningMode::Without {
                    // Terminal block for the kerning-less shape; trailing
                    // bytes are left unread.
                    break;
                }
            }
            BlockType::Kernings => {
                if mode == KerningMode::Without {
                    return Err(BmFontError::UnknownBlockType(tag));
                }
                kernings = blocks::decode_kernings(&mut body_cursor)?;
                break;
            }
        }
    }

    info!(
        "BMFont decoded: {} page(s), {} glyph(s), {} kerning pair(s)",
        pages.len(),
        glyphs.len(),
        kernings.len()
    );

    Ok(FontFile {
        info: font_info.unwrap_or_default(),
        common: common.unwrap_or_default(),
        pages,
        glyphs,
        kernings,
    })
}

/// Validates the 4-byte file header: `B`, `M`, `F`, then the version byte.
fn read_magic(cursor: &mut ByteCursor<'_>) -> Result<()> {
    let magic = cursor.peek_bytes(3)?;
    let found = [magic[0], magic[1], magic[2]];
    if found != MAGIC {
        return Err(BmFontError::InvalidMagic { found });
    }
    cursor.advance(3)?;

    let version = cursor.read_u8()?;
    if version != SUPPORTED_VERSION {
        return Err(BmFontError::UnsupportedVersion(version));
    }
    Ok(())
}
