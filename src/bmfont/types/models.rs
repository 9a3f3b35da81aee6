//! Data structures representing BMFont binary format components.

use std::collections::HashMap;

use super::error::{BmFontError, Result};

/// Maximum number of texture pages a font may reference.
pub const MAX_PAGES: usize = 5;

/// Maximum page-name length in bytes, excluding the NUL terminator.
pub const MAX_PAGE_NAME_LEN: usize = 31;

/// Glyph ids must be strictly below this bound.
pub const MAX_GLYPHS: usize = 1024;

/// Maximum number of kerning pairs a font may carry.
pub const MAX_KERNING_PAIRS: usize = 1024;

/// Block type tags of the BMFont binary container.
///
/// Each block in the file body is a 1-byte tag followed by a 4-byte
/// little-endian signed body size and the body itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Info = 1,
    Common = 2,
    Pages = 3,
    Chars = 4,
    Kernings = 5,
}

impl TryFrom<u8> for BlockType {
    type Error = BmFontError;
    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Info),
            2 => Ok(Self::Common),
            3 => Ok(Self::Pages),
            4 => Ok(Self::Chars),
            5 => Ok(Self::Kernings),
            _ => Err(BmFontError::UnknownBlockType(value)),
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BlockType::Info => write!(f, "info"),
            BlockType::Common => write!(f, "common"),
            BlockType::Pages => write!(f, "pages"),
            BlockType::Chars => write!(f, "chars"),
            BlockType::Kernings => write!(f, "kernings"),
        }
    }
}

/// Which of the two deployed output shapes to decode.
///
/// The format exists in the wild both with and without kerning data; the
/// mode selects which shape the decoder produces from a single shared block
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KerningMode {
    /// CHARS is the final block; a kerning block tag is not recognised.
    Without,
    /// An optional KERNINGS block may follow CHARS.
    With,
}

/// Scalar font metadata from the INFO block, plus the font family name.
///
/// Matches the 14-byte fixed prefix of the INFO block body, followed on
/// disk by the NUL-terminated name. The name is copied out of the input
/// buffer during decoding.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub font_size: i16,
    pub bit_field: u8,
    pub char_set: u8,
    pub stretch_h: u16,
    pub aa: u8,
    pub padding_up: u8,
    pub padding_right: u8,
    pub padding_down: u8,
    pub padding_left: u8,
    pub spacing_horiz: u8,
    pub spacing_vert: u8,
    pub outline: u8,
    pub font_name: String,
}

/// Shared layout metrics from the COMMON block.
///
/// `pages` governs how many page names the PAGES block must contain.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommonMetrics {
    pub line_height: u16,
    pub base: u16,
    pub scale_w: u16,
    pub scale_h: u16,
    pub pages: u16,
    pub bit_field: u8,
    pub alpha_chnl: u8,
    pub red_chnl: u8,
    pub green_chnl: u8,
    pub blue_chnl: u8,
}

/// One texture page name from the PAGES block.
///
/// The collection index corresponds to in-file order and is what glyph
/// records reference through their `page` field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageRef {
    pub name: String,
}

/// One glyph's atlas placement and rendering metrics, keyed by codepoint.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GlyphRecord {
    pub id: u32,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub xoffset: i16,
    pub yoffset: i16,
    pub xadvance: i16,
    pub page: u8,
    pub chnl: u8,
}

/// A per-character-pair horizontal adjustment from the KERNINGS block.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KerningPair {
    pub first: u32,
    pub second: u32,
    pub amount: i16,
}

/// A fully decoded BMFont file.
///
/// Built incrementally across the block loop and only handed out once
/// decoding finishes without error. Sections whose block never appeared in
/// the stream are left at their zeroed defaults.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub info: FontInfo,
    pub common: CommonMetrics,
    pub pages: Vec<PageRef>,
    /// Glyphs keyed by codepoint. Sparse: only ids present in the file.
    pub glyphs: HashMap<u32, GlyphRecord>,
    /// Empty unless decoded with [`KerningMode::With`] from a file that
    /// carries a KERNINGS block.
    pub kernings: Vec<KerningPair>,
}

impl FontFile {
    /// Decodes a complete BMFont binary buffer.
    ///
    /// Convenience forwarding to [`decode`](crate::bmfont::decode); see it
    /// for the full contract.
    pub fn decode(data: &[u8], mode: KerningMode) -> Result<Self> {
        crate::bmfont::decoder::decode(data, mode)
    }

    /// Looks up a glyph by its codepoint.
    pub fn glyph(&self, id: u32) -> Option<&GlyphRecord> {
        self.glyphs.get(&id)
    }

    /// Returns the kerning adjustment for a consecutive glyph pair, if any.
    pub fn kerning_amount(&self, first: u32, second: u32) -> Option<i16> {
        self.kernings
            .iter()
            .find(|pair| pair.first == first && pair.second == second)
            .map(|pair| pair.amount)
    }

    /// Resolves a glyph's `page` index to the page name.
    pub fn page_name(&self, page: u8) -> Option<&str> {
        self.pages.get(page as usize).map(|page| page.name.as_str())
    }
}
