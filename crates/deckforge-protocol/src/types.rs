//! The decoded deck and its parts.
//!
//! A [`Deck`] is the only thing the decoder produces. It owns its three
//! sequences outright. Nothing in it borrows from the base64 text or the
//! intermediate byte buffer, and it has no setters: once decoded, a deck
//! never changes.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// The game format a deck was built for.
///
/// Only two formats are recognized. Every other encoded value, including
/// `0` and formats added to the game after this code was written, maps to
/// [`Format::Unknown`] rather than failing the decode.
///
/// `#[serde(rename_all = "lowercase")]` gives `"wild"`, `"standard"`,
/// `"unknown"` in JSON, matching [`Display`](fmt::Display).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Unrecognized or missing format code.
    #[default]
    Unknown,
    /// Format code `1`.
    Wild,
    /// Format code `2`.
    Standard,
}

impl Format {
    /// Maps an encoded format code to a [`Format`]. Never fails.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Wild,
            2 => Self::Standard,
            _ => Self::Unknown,
        }
    }

    /// The canonical code for this format. `Unknown` reports `0`.
    pub fn code(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::Wild => 1,
            Self::Standard => 2,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Wild => write!(f, "wild"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One main-deck line: a card id and how many copies of it.
///
/// The same id can appear in more than one entry (for example once from
/// the "single copy" group and once from the "n copies" group). Entries
/// are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEntry {
    /// Card database id.
    pub id: u32,
    /// Number of copies. Not validated: any value the string carries.
    pub count: u32,
}

/// One sideboard line: a card id, its count, and the card that owns it.
///
/// Some cards carry their own small side collection; `owner` is the id of
/// that card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideboardEntry {
    /// Card database id.
    pub id: u32,
    /// Number of copies.
    pub count: u32,
    /// Id of the main-deck card this entry belongs to.
    pub owner: u32,
}

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// A fully decoded deck.
///
/// Ordering guarantees, which hold for every `Deck` the decoder returns:
///
/// - `heroes` ascending (duplicates kept)
/// - `cards` ascending by `id`; equal ids keep their encoded order
/// - `sideboards` ascending by `(owner, id)`; equal keys keep their
///   encoded order
///
/// `sideboards` is empty when the string has no sideboard section. None of
/// the sequences is ever "missing", only empty.
///
/// There is no public constructor: build one with [`crate::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    format: Format,
    heroes: Vec<u32>,
    cards: Vec<CardEntry>,
    sideboards: Vec<SideboardEntry>,
}

impl Deck {
    /// Assembles a deck from already-ordered parts.
    pub(crate) fn from_parts(
        format: Format,
        heroes: Vec<u32>,
        cards: Vec<CardEntry>,
        sideboards: Vec<SideboardEntry>,
    ) -> Self {
        Self {
            format,
            heroes,
            cards,
            sideboards,
        }
    }

    /// The format this deck was built for.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Hero ids, ascending.
    pub fn heroes(&self) -> &[u32] {
        &self.heroes
    }

    /// Main-deck entries, ascending by id.
    pub fn cards(&self) -> &[CardEntry] {
        &self.cards
    }

    /// Sideboard entries, ascending by `(owner, id)`.
    pub fn sideboards(&self) -> &[SideboardEntry] {
        &self.sideboards
    }

    /// Total number of main-deck cards (sum of every entry's count).
    ///
    /// Returned as `u64` because the sum of `u32` counts can exceed
    /// `u32::MAX` on hostile input.
    pub fn total_cards(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.count)).sum()
    }

    /// The distinct sideboard owners, ascending.
    pub fn sideboard_owners(&self) -> Vec<u32> {
        let mut owners: Vec<u32> =
            self.sideboards.iter().map(|s| s.owner).collect();
        // Already sorted by owner, so `dedup` alone removes repeats.
        owners.dedup();
        owners
    }

    /// Sideboard entries belonging to `owner`, in deck order.
    pub fn sideboard_for(
        &self,
        owner: u32,
    ) -> impl Iterator<Item = &SideboardEntry> + '_ {
        self.sideboards.iter().filter(move |s| s.owner == owner)
    }
}
