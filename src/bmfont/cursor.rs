//! Bounds-checked byte cursor over an immutable input buffer.
//!
//! All multi-byte reads are little-endian regardless of host byte order,
//! which is what the BMFont binary format stores on disk. Every read,
//! peek, and seek is checked against the buffer length; crossing the end
//! is a [`TruncatedInput`](crate::BmFontError::TruncatedInput) error,
//! never an out-of-bounds access.

use byteorder::{ByteOrder, LittleEndian};

use super::types::error::{BmFontError, Result};

/// A forward-only read position over a borrowed byte buffer.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position in bytes from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes left in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True once the position has reached the end of the buffer.
    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns a read-only view of the next `n` bytes without advancing.
    pub fn peek_bytes(&self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(BmFontError::TruncatedInput {
                offset: self.pos,
                needed: n,
                available: self.remaining(),
            });
        }
        Ok(&self.data[self.pos..self.pos + n])
    }

    /// Moves the position forward by `n` bytes.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.peek_bytes(n)?;
        self.pos += n;
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(n)?;
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(LittleEndian::read_i16(self.take(2)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }
}
