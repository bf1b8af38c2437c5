//! The lookup seam between decoded decks and card data.
//!
//! Deckforge doesn't ship card data. Where names come from is the
//! embedder's decision: a bundled JSON dump, a database, a remote card
//! API behind an access token. The [`CardCatalog`] trait is the one place
//! those sources plug in, so the inspector works the same with all of
//! them, and with a mock in tests.

use crate::{CardInfo, CatalogError};

/// Maps card ids to display attributes.
///
/// # Trait bounds
///
/// - `Send + Sync` → one catalog can be shared by every thread that
///   inspects decks.
///
/// # Example
///
/// ```rust
/// use deckforge_catalog::{CardCatalog, CardInfo, CatalogError};
///
/// /// Names every card after its id. Only useful for debugging.
/// struct EchoCatalog;
///
/// impl CardCatalog for EchoCatalog {
///     fn card(&self, id: u32) -> Result<Option<CardInfo>, CatalogError> {
///         Ok(Some(CardInfo::new(id, format!("card #{id}"))))
///     }
/// }
///
/// let info = EchoCatalog.card(42).unwrap().unwrap();
/// assert_eq!(info.name, "card #42");
/// ```
pub trait CardCatalog: Send + Sync {
    /// Looks up one card.
    ///
    /// # Returns
    /// - `Ok(Some(info))`: the catalog knows this id
    /// - `Ok(None)`: the catalog is working but has never heard of it
    /// - `Err(_)`: the catalog couldn't answer (source unavailable, etc.)
    fn card(&self, id: u32) -> Result<Option<CardInfo>, CatalogError>;
}

/// References forward to the catalog they point at, so an inspector can
/// borrow a catalog instead of owning it.
impl<C: CardCatalog + ?Sized> CardCatalog for &C {
    fn card(&self, id: u32) -> Result<Option<CardInfo>, CatalogError> {
        (**self).card(id)
    }
}

/// A catalog that knows no cards.
///
/// The default when no card data is configured: every lookup succeeds
/// with `None`, and reports fall back to placeholder names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCatalog;

impl CardCatalog for NullCatalog {
    fn card(&self, _id: u32) -> Result<Option<CardInfo>, CatalogError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_catalog_knows_nothing() {
        assert!(NullCatalog.card(1).unwrap().is_none());
        assert!(NullCatalog.card(u32::MAX).unwrap().is_none());
    }

    #[test]
    fn test_reference_forwards_to_catalog() {
        struct One;
        impl CardCatalog for One {
            fn card(&self, id: u32) -> Result<Option<CardInfo>, CatalogError> {
                Ok((id == 1).then(|| CardInfo::new(1, "One")))
            }
        }

        let catalog = One;
        let borrowed: &dyn CardCatalog = &catalog;
        assert_eq!(borrowed.card(1).unwrap().unwrap().name, "One");
        assert!((&catalog).card(2).unwrap().is_none());
    }
}
