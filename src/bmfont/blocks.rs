//! Decode routines for the individual BMFont block bodies.
//!
//! Each routine receives a cursor bounded to exactly the declared block
//! body, so every fixed-width read and name scan is checked against both
//! the block extent and the underlying buffer.

use std::collections::HashMap;

use encoding_rs::UTF_8;
use log::{debug, trace};

use super::cursor::ByteCursor;
use super::types::error::{BmFontError, Result};
use super::types::models::{
    CommonMetrics, FontInfo, GlyphRecord, KerningPair, PageRef, MAX_GLYPHS, MAX_KERNING_PAIRS,
    MAX_PAGES, MAX_PAGE_NAME_LEN,
};

/// On-disk size of one glyph record in a CHARS block.
const GLYPH_RECORD_SIZE: usize = 20;

/// On-disk size of one pair record in a KERNINGS block.
const KERNING_RECORD_SIZE: usize = 10;

/// Decodes the INFO block: 14 fixed bytes followed by the NUL-terminated
/// font family name.
pub(super) fn decode_info(cursor: &mut ByteCursor<'_>) -> Result<FontInfo> {
    let font_size = cursor.read_i16()?;
    let bit_field = cursor.read_u8()?;
    let char_set = cursor.read_u8()?;
    let stretch_h = cursor.read_u16()?;
    let aa = cursor.read_u8()?;
    let padding_up = cursor.read_u8()?;
    let padding_right = cursor.read_u8()?;
    let padding_down = cursor.read_u8()?;
    let padding_left = cursor.read_u8()?;
    let spacing_horiz = cursor.read_u8()?;
    let spacing_vert = cursor.read_u8()?;
    let outline = cursor.read_u8()?;
    let font_name = read_name(cursor)?;

    debug!(
        "Info block: font '{}', size {}, charset {}, outline {}",
        font_name, font_size, char_set, outline
    );

    Ok(FontInfo {
        font_size,
        bit_field,
        char_set,
        stretch_h,
        aa,
        padding_up,
        padding_right,
        padding_down,
        padding_left,
        spacing_horiz,
        spacing_vert,
        outline,
        font_name,
    })
}

/// Decodes the 15-byte COMMON block. Any surplus declared payload was
/// already consumed by the caller when it bounded the block body.
pub(super) fn decode_common(cursor: &mut ByteCursor<'_>) -> Result<CommonMetrics> {
    let line_height = cursor.read_u16()?;
    let base = cursor.read_u16()?;
    let scale_w = cursor.read_u16()?;
    let scale_h = cursor.read_u16()?;
    let pages = cursor.read_u16()?;
    let bit_field = cursor.read_u8()?;
    let alpha_chnl = cursor.read_u8()?;
    let red_chnl = cursor.read_u8()?;
    let green_chnl = cursor.read_u8()?;
    let blue_chnl = cursor.read_u8()?;

    debug!(
        "Common block: line height {}, baseline {}, {} page(s), {}x{} texture",
        line_height, base, pages, scale_w, scale_h
    );

    Ok(CommonMetrics {
        line_height,
        base,
        scale_w,
        scale_h,
        pages,
        bit_field,
        alpha_chnl,
        red_chnl,
        green_chnl,
        blue_chnl,
    })
}

/// Decodes the PAGES block: exactly `page_count` consecutive
/// NUL-terminated texture page names.
///
/// `page_count` comes from a previously decoded COMMON block; the caller
/// enforces that ordering.
pub(super) fn decode_pages(cursor: &mut ByteCursor<'_>, page_count: u16) -> Result<Vec<PageRef>> {
    if page_count as usize > MAX_PAGES {
        return Err(BmFontError::CapacityExceeded {
            item_type: "page",
            found: page_count as u64,
            max: MAX_PAGES as u64,
        });
    }

    let mut pages = Vec::with_capacity(page_count as usize);
    for index in 0..page_count {
        let bytes = scan_name_bytes(cursor)?;
        // The capacity bound applies to the raw on-disk bytes, before any
        // lossy decoding can change the length.
        if bytes.len() > MAX_PAGE_NAME_LEN {
            return Err(BmFontError::CapacityExceeded {
                item_type: "page name bytes",
                found: bytes.len() as u64,
                max: MAX_PAGE_NAME_LEN as u64,
            });
        }
        let name = decode_text(bytes);
        trace!("Page {}: '{}'", index, name);
        pages.push(PageRef { name });
    }
    Ok(pages)
}

/// Decodes the CHARS block into the glyph mapping, keyed by codepoint.
pub(super) fn decode_chars(
    cursor: &mut ByteCursor<'_>,
    glyphs: &mut HashMap<u32, GlyphRecord>,
) -> Result<()> {
    let count =
        checked_record_count(cursor.remaining(), GLYPH_RECORD_SIZE, "glyph record", MAX_GLYPHS)?;
    debug!("Chars block: {} glyph record(s)", count);

    for _ in 0..count {
        let id = cursor.read_u32()?;
        if id as usize >= MAX_GLYPHS {
            return Err(BmFontError::GlyphIdOutOfRange {
                id,
                max: MAX_GLYPHS as u32,
            });
        }
        let x = cursor.read_u16()?;
        let y = cursor.read_u16()?;
        let width = cursor.read_u16()?;
        let height = cursor.read_u16()?;
        let xoffset = cursor.read_i16()?;
        let yoffset = cursor.read_i16()?;
        let xadvance = cursor.read_i16()?;
        let page = cursor.read_u8()?;
        let chnl = cursor.read_u8()?;

        trace!("Glyph {}: {}x{} at ({}, {}) on page {}", id, width, height, x, y, page);
        glyphs.insert(
            id,
            GlyphRecord {
                id,
                x,
                y,
                width,
                height,
                xoffset,
                yoffset,
                xadvance,
                page,
                chnl,
            },
        );
    }
    Ok(())
}

/// Decodes the KERNINGS block into an ordered pair list.
pub(super) fn decode_kernings(cursor: &mut ByteCursor<'_>) -> Result<Vec<KerningPair>> {
    let count = checked_record_count(
        cursor.remaining(),
        KERNING_RECORD_SIZE,
        "kerning pair",
        MAX_KERNING_PAIRS,
    )?;
    debug!("Kernings block: {} pair(s)", count);

    let mut pairs = Vec::with_capacity(count);
    for _ in 0..count {
        let first = cursor.read_u32()?;
        let second = cursor.read_u32()?;
        let amount = cursor.read_i16()?;
        pairs.push(KerningPair {
            first,
            second,
            amount,
        });
    }
    Ok(pairs)
}

/// Validates the record count implied by a repeated-record block body.
///
/// The body must divide into whole records and the implied count must fit
/// the fixed capacity; both failures are capacity errors.
fn checked_record_count(
    body_len: usize,
    record_size: usize,
    item_type: &'static str,
    max: usize,
) -> Result<usize> {
    let count = body_len / record_size;
    if body_len % record_size != 0 {
        return Err(BmFontError::CapacityExceeded {
            item_type,
            found: body_len as u64,
            max: (count * record_size) as u64,
        });
    }
    if count > max {
        return Err(BmFontError::CapacityExceeded {
            item_type,
            found: count as u64,
            max: max as u64,
        });
    }
    Ok(count)
}

/// Scans forward for a NUL terminator, returning the name bytes and
/// advancing past the terminator.
///
/// The scan is bounded by the cursor, so a malformed field with no
/// terminator inside the block body fails instead of running on into
/// neighbouring data.
fn scan_name_bytes<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a [u8]> {
    let rest = cursor.peek_bytes(cursor.remaining())?;
    let len = rest
        .iter()
        .position(|&byte| byte == 0)
        .ok_or(BmFontError::TruncatedInput {
            offset: cursor.position(),
            needed: cursor.remaining() + 1,
            available: cursor.remaining(),
        })?;
    cursor.advance(len + 1)?;
    Ok(&rest[..len])
}

/// Reads a NUL-terminated name field and copies it out as text.
fn read_name(cursor: &mut ByteCursor<'_>) -> Result<String> {
    let bytes = scan_name_bytes(cursor)?;
    Ok(decode_text(bytes))
}

/// Decodes name bytes as UTF-8, replacing any invalid sequences.
fn decode_text(bytes: &[u8]) -> String {
    let (text, _, _) = UTF_8.decode(bytes);
    text.into_owned()
}
