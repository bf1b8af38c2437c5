//! Deckstring decoder: base64 text → [`Deck`].
//!
//! The binary layout, read front to back with no separators:
//!
//! ```text
//! byte    0x00 marker
//! varint  version (must be 1)
//! varint  format code
//! varint  hero count,           then that many hero ids
//! varint  single-copy count,    then that many card ids
//! varint  double-copy count,    then that many card ids
//! varint  n-copy count,         then that many (id, count) pairs
//! ── optional ──
//! byte    0x01 sideboard marker
//! varint  single-copy count,    then that many (id, owner) pairs
//! varint  double-copy count,    then that many (id, owner) pairs
//! varint  n-copy count,         then that many (id, count, owner) triples
//! ```
//!
//! Decoding is all-or-nothing. The working buffers are plain locals, so an
//! early `?` return drops whatever was accumulated and the caller never
//! sees a half-built deck.

use std::str::FromStr;

use base64::Engine;

use crate::types::{CardEntry, Deck, Format, SideboardEntry};
use crate::varint::Cursor;
use crate::DeckstringError;

/// First byte of every deckstring.
const MARKER: u8 = 0x00;

/// The only version this decoder understands.
pub const DECKSTRING_VERSION: u32 = 1;

/// Byte that introduces the optional sideboard section.
const SIDEBOARD_MARKER: u8 = 0x01;

/// Decodes a base64 deckstring into a [`Deck`].
///
/// The text must be standard-alphabet (`+`, `/`) base64 with canonical `=`
/// padding. Surrounding whitespace is not stripped; trim first if the
/// string came from user input.
///
/// # Errors
/// - [`DeckstringError::InvalidEncoding`]: not valid base64
/// - [`DeckstringError::InvalidDeckstring`]: empty, or missing the `0x00` marker
/// - [`DeckstringError::UnsupportedVersion`]: version is not `1`
/// - [`DeckstringError::UnexpectedEndOfInput`]: the bytes stop mid-field
///
/// # Example
///
/// ```
/// use deckforge_protocol::{decode, Format};
///
/// // marker, version 1, wild, 1 hero (7), one single-copy card (3),
/// // no double-copy cards, no n-copy cards
/// let deck = decode("AAEBAQcBAwAA").unwrap();
///
/// assert_eq!(deck.format(), Format::Wild);
/// assert_eq!(deck.heroes(), &[7]);
/// assert_eq!(deck.cards().len(), 1);
/// assert!(deck.sideboards().is_empty());
/// ```
pub fn decode(text: &str) -> Result<Deck, DeckstringError> {
    // The decoded buffer only lives for the duration of this call; the
    // returned deck copies every value out of it.
    let bytes = base64::engine::general_purpose::STANDARD.decode(text)?;
    decode_bytes(&bytes)
}

/// Decodes an already base64-decoded deckstring buffer.
///
/// Same grammar and errors as [`decode`], minus the base64 step.
pub fn decode_bytes(bytes: &[u8]) -> Result<Deck, DeckstringError> {
    let mut cursor = Cursor::new(bytes);

    // The empty buffer is the same failure as a wrong first byte.
    if cursor.peek() != Some(MARKER) {
        return Err(DeckstringError::InvalidDeckstring);
    }
    cursor.read_byte()?;

    let version = cursor.read_varint()?;
    if version != DECKSTRING_VERSION {
        return Err(DeckstringError::UnsupportedVersion(version));
    }

    let format = Format::from_code(cursor.read_varint()?);

    let mut heroes = read_heroes(&mut cursor)?;
    heroes.sort();

    let mut cards = read_cards(&mut cursor)?;
    // `sort_by_key` is stable: equal ids keep single → double → n order.
    cards.sort_by_key(|card| card.id);

    let mut sideboards = if cursor.peek() == Some(SIDEBOARD_MARKER) {
        cursor.read_byte()?;
        read_sideboards(&mut cursor)?
    } else {
        // End of buffer, or some other byte: no sideboard section. The
        // byte is left unconsumed and nothing after it is examined.
        Vec::new()
    };
    sideboards.sort_by_key(|entry| (entry.owner, entry.id));

    Ok(Deck::from_parts(format, heroes, cards, sideboards))
}

impl FromStr for Deck {
    type Err = DeckstringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Reads a count and returns it along with a safe initial capacity.
///
/// Every entry needs at least one byte, so the remaining byte count bounds
/// how many entries can really follow. A string that claims four billion
/// cards fails with `UnexpectedEndOfInput` instead of allocating for them.
fn read_count(cursor: &mut Cursor<'_>) -> Result<(u32, usize), DeckstringError> {
    let count = cursor.read_varint()?;
    let capacity = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(cursor.remaining());
    Ok((count, capacity))
}

fn read_heroes(cursor: &mut Cursor<'_>) -> Result<Vec<u32>, DeckstringError> {
    let (count, capacity) = read_count(cursor)?;
    let mut heroes = Vec::with_capacity(capacity);
    for _ in 0..count {
        heroes.push(cursor.read_varint()?);
    }
    Ok(heroes)
}

/// Reads the three main-deck groups into one sequence, in encoded order.
fn read_cards(
    cursor: &mut Cursor<'_>,
) -> Result<Vec<CardEntry>, DeckstringError> {
    let mut cards = Vec::new();

    for fixed_count in [1, 2] {
        let (count, capacity) = read_count(cursor)?;
        cards.reserve(capacity);
        for _ in 0..count {
            let id = cursor.read_varint()?;
            cards.push(CardEntry {
                id,
                count: fixed_count,
            });
        }
    }

    let (count, capacity) = read_count(cursor)?;
    cards.reserve(capacity);
    for _ in 0..count {
        let id = cursor.read_varint()?;
        let count = cursor.read_varint()?;
        cards.push(CardEntry { id, count });
    }

    Ok(cards)
}

/// Reads the three sideboard groups. `owner` is always the last field of
/// each entry.
fn read_sideboards(
    cursor: &mut Cursor<'_>,
) -> Result<Vec<SideboardEntry>, DeckstringError> {
    let mut sideboards = Vec::new();

    for fixed_count in [1, 2] {
        let (count, capacity) = read_count(cursor)?;
        sideboards.reserve(capacity);
        for _ in 0..count {
            let id = cursor.read_varint()?;
            let owner = cursor.read_varint()?;
            sideboards.push(SideboardEntry {
                id,
                count: fixed_count,
                owner,
            });
        }
    }

    let (count, capacity) = read_count(cursor)?;
    sideboards.reserve(capacity);
    for _ in 0..count {
        let id = cursor.read_varint()?;
        let count = cursor.read_varint()?;
        let owner = cursor.read_varint()?;
        sideboards.push(SideboardEntry { id, count, owner });
    }

    Ok(sideboards)
}
