//! Deckstring wire format for Deckforge.
//!
//! A deckstring is a short base64 string that encodes a whole deck:
//! format, heroes, main-deck cards with counts, and optional sideboards.
//! This crate turns one into a [`Deck`].
//!
//! - **Types** ([`Deck`], [`Format`], [`CardEntry`], [`SideboardEntry`]):
//!   the decoded value.
//! - **Decoder** ([`decode`], [`decode_bytes`]): base64 text or raw bytes
//!   to a `Deck`.
//! - **Cursor** ([`Cursor`]): the varint reader the decoder is built on.
//! - **Errors** ([`DeckstringError`]): the four ways decoding can fail.
//!
//! # Architecture
//!
//! The decoder is format-level only. It has no idea whether an id is a
//! real card; annotating ids is the catalog layer's job.
//!
//! ```text
//! base64 text → bytes → Cursor (varints) → Deck → Catalog (names)
//! ```
//!
//! Decoding is synchronous and pure. It never logs and never retries.

mod codec;
mod error;
mod types;
mod varint;

pub use codec::{decode, decode_bytes, DECKSTRING_VERSION};
pub use error::DeckstringError;
pub use types::{CardEntry, Deck, Format, SideboardEntry};
pub use varint::Cursor;
