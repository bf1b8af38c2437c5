//! # Deckforge
//!
//! Decode and inspect collectible card game deckstrings.
//!
//! Deckforge turns a base64 deckstring into a typed [`Deck`], then
//! optionally attaches card names from a [`CardCatalog`] to produce a
//! [`DeckReport`] you can print or serialize.
//!
//! ## Quick Start
//!
//! ```rust
//! use deckforge::prelude::*;
//!
//! let deck = decode("AAEBAQcBAwAA")?;
//! assert_eq!(deck.format(), Format::Wild);
//!
//! let report = DeckInspector::builder().build().inspect("AAEBAQcBAwAA")?;
//! println!("{report}");
//! # Ok::<(), DeckforgeError>(())
//! ```

mod config;
mod error;
mod inspector;
mod report;

pub use config::InspectConfig;
pub use error::DeckforgeError;
pub use inspector::{DeckInspector, DeckInspectorBuilder};
pub use report::{DeckReport, ReportCard, ReportHero, ReportSideboard};

pub use deckforge_catalog::{
    CardCatalog, CardInfo, CatalogError, JsonCatalog, NullCatalog,
};
pub use deckforge_protocol::{
    decode, decode_bytes, CardEntry, Deck, DeckstringError, Format,
    SideboardEntry,
};

/// Everything needed to decode and inspect decks, in one import.
pub mod prelude {
    pub use crate::{
        decode, CardCatalog, CardEntry, CardInfo, Deck, DeckInspector,
        DeckReport, DeckforgeError, DeckstringError, Format, InspectConfig,
        JsonCatalog, NullCatalog, SideboardEntry,
    };
}
