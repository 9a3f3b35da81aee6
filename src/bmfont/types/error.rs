//! Custom error types for the bmfont-reader crate.

use thiserror::Error;

use super::models::BlockType;

/// The primary error type for all operations in this crate.
///
/// Every decoding error is fatal to the current decode call: there is no
/// partial-record recovery, and on `Err` the caller receives no output
/// structure.
#[derive(Debug, Error)]
pub enum BmFontError {
    /// An error originating from I/O operations while loading a font file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer does not begin with the `BMF` magic bytes.
    #[error("invalid magic: expected \"BMF\", found {found:?}")]
    InvalidMagic { found: [u8; 3] },

    /// The format version byte is not supported. Only binary version 3 is.
    #[error("unsupported BMFont version: {0}. Only binary version 3 is supported.")]
    UnsupportedVersion(u8),

    /// A read or name scan would cross the end of the buffer or of the
    /// declared block body.
    #[error("truncated input: needed {needed} bytes at offset {offset}, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A block arrived before another block it structurally depends on
    /// (e.g. PAGES needs the page count from a preceding COMMON).
    #[error("{block} block requires a preceding {requires} block")]
    OutOfOrderBlock { block: BlockType, requires: BlockType },

    /// A collection exceeds its fixed maximum, or a repeated-record block
    /// declares a byte size that overruns its last whole record.
    #[error("{item_type} capacity exceeded: {found} > {max}")]
    CapacityExceeded {
        item_type: &'static str,
        found: u64,
        max: u64,
    },

    /// A glyph id at or above the fixed capacity bound. Ids are unsigned by
    /// construction, so only the upper bound is checked.
    #[error("glyph id {id} out of range (maximum {max})")]
    GlyphIdOutOfRange { id: u32, max: u32 },

    /// An unrecognised block type tag. Unknown blocks are fatal, not
    /// skipped.
    #[error("unknown block type: {0}")]
    UnknownBlockType(u8),
}

/// A convenience `Result` type alias using the crate's `BmFontError` type.
pub type Result<T> = std::result::Result<T, BmFontError>;
