//! Error types for the catalog layer.

/// Errors that can occur while loading or querying a card catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read card catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog data is not a valid JSON card list.
    #[error("failed to parse card catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog's backing source could not answer right now.
    ///
    /// Local catalogs never return this; it exists for implementations
    /// backed by something that can be down (a remote card service).
    #[error("card catalog unavailable: {0}")]
    Unavailable(String),
}
