//! # bmfont-reader
//!
//! A reader for bitmap font descriptors produced by the AngelCode BMFont
//! tool (`.fnt` files, binary variant only: magic `BMF`, version 3).
//!
//! The decoder is a pure function over a caller-supplied byte buffer and
//! performs no I/O of its own. Two deployed output shapes exist in practice,
//! with and without kerning data; both are handled by one decode path
//! selected through [`KerningMode`].
//!
//! **Note:** The text and XML variants of the format are not supported, and
//! there is no write/serialize path.
pub mod bmfont;

// Re-export the main types for convenience
pub use bmfont::{
    decode,
    cursor::ByteCursor,
    types::error::{BmFontError, Result},
    types::models::{
        BlockType,
        CommonMetrics,
        FontFile,
        FontInfo,
        GlyphRecord,
        KerningMode,
        KerningPair,
        PageRef,
    },
};
