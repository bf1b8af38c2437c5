//! Card metadata lookup for Deckforge.
//!
//! A decoded deck is just numbers. This crate is where those numbers get
//! names:
//!
//! 1. **The seam**: the [`CardCatalog`] trait, one method that maps a
//!    card id to a [`CardInfo`] (or "don't know that one").
//! 2. **Local catalogs**: [`JsonCatalog`] (an in-memory table loaded from
//!    a JSON card list) and [`NullCatalog`] (knows nothing).
//!
//! # How it fits in the stack
//!
//! ```text
//! Inspector (above)  ← asks the catalog for names while building a report
//!     ↕
//! Catalog (this crate)  ← id → CardInfo
//!     ↕
//! Card data source  ← a JSON file today, a remote card API tomorrow
//! ```
//!
//! The decoder never talks to a catalog. Whether an id is a real card is
//! not a question the wire format answers.

mod card;
mod catalog;
mod error;
mod json;

pub use card::CardInfo;
pub use catalog::{CardCatalog, NullCatalog};
pub use error::CatalogError;
pub use json::JsonCatalog;
