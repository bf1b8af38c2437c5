//! Unified error type for Deckforge.

use deckforge_catalog::CatalogError;
use deckforge_protocol::DeckstringError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `deckforge` facade you deal with this single error type
/// instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum DeckforgeError {
    /// The deckstring could not be decoded.
    #[error(transparent)]
    Deckstring(#[from] DeckstringError),

    /// A card catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An inspector configuration file is malformed.
    #[error("invalid inspector config: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
