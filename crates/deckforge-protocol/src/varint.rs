//! Byte cursor and varint reader for the deckstring grammar.
//!
//! Every integer in a deckstring is an unsigned LEB128-style varint:
//! little-endian groups of 7 payload bits, where the high bit of each
//! byte says "another byte follows".
//!
//! ```text
//! 0x90 0x9A 0x06
//!  │    │    └─ 0000110  (continuation clear → last byte)
//!  │    └────── 0011010  (continuation set)
//!  └─────────── 0010000  (continuation set)
//!
//! value = 0010000 | 0011010 << 7 | 0000110 << 14 = 101648
//! ```
//!
//! The read position is an explicit value owned by the [`Cursor`], not a
//! stream object. That keeps each grammar step testable in isolation: hand
//! the cursor raw bytes and check where it ends up.

use crate::DeckstringError;

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// A read position over a borrowed byte buffer.
///
/// The cursor only moves forward. Reads that would run past the end of the
/// buffer fail with [`DeckstringError::UnexpectedEndOfInput`] and leave the
/// position at the end.
///
/// # Example
///
/// ```
/// use deckforge_protocol::Cursor;
///
/// let bytes = [0x00, 0x90, 0x9A, 0x06];
/// let mut cursor = Cursor::new(&bytes);
///
/// assert_eq!(cursor.read_byte().unwrap(), 0x00);
/// assert_eq!(cursor.read_varint().unwrap(), 101_648);
/// assert_eq!(cursor.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Current read position (number of bytes consumed so far).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.pos)
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Looks at the next byte without consuming it.
    ///
    /// Returns `None` at the end of the buffer instead of failing. The
    /// optional sideboard section relies on being able to ask "is there
    /// anything left?" without that being an error.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Consumes one raw byte.
    pub fn read_byte(&mut self) -> Result<u8, DeckstringError> {
        let byte = self.peek().ok_or(DeckstringError::UnexpectedEndOfInput {
            offset: self.bytes.len(),
        })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Decodes one unsigned varint and advances past it.
    ///
    /// Accumulates `byte & 0x7F` shifted left by a running multiple of 7
    /// into a 32-bit value, for as long as the current byte has its high
    /// bit set.
    ///
    /// # Long varints
    ///
    /// There is no cap on the number of continuation bytes. A varint
    /// longer than 5 bytes does not fail: payload bits that land at or
    /// above bit 32 are silently dropped, so the result is the low 32 bits
    /// of the encoded value. This matches existing deckstring readers and
    /// must not be tightened into an error.
    ///
    /// # Errors
    /// Returns [`DeckstringError::UnexpectedEndOfInput`] if the buffer ends
    /// before a byte with the continuation bit clear is found.
    pub fn read_varint(&mut self) -> Result<u32, DeckstringError> {
        let mut value: u32 = 0;
        let mut shift: u32 = 0;
        loop {
            let byte = self.read_byte()?;
            // `checked_shl` is `None` once the shift reaches 32: those bits
            // fall entirely outside the accumulator.
            let payload = u32::from(byte & 0x7F);
            value |= payload.checked_shl(shift).unwrap_or(0);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift = shift.saturating_add(7);
        }
    }
}
