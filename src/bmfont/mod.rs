//! Core BMFont binary decoding module

pub mod cursor;
pub mod types;

mod blocks;
mod decoder;

pub use decoder::decode;
pub use types::error::{BmFontError, Result};
pub use types::models::{FontFile, KerningMode};
