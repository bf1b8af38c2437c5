//! A catalog loaded from a JSON card list.

use std::collections::HashMap;
use std::path::Path;

use crate::{CardCatalog, CardInfo, CatalogError};

/// An in-memory catalog built from a JSON array of cards.
///
/// The expected input is a flat array:
///
/// ```json
/// [
///   { "id": 69566, "name": "Some Card", "manaCost": 2 },
///   { "id": 101648, "name": "Some Hero", "cardClass": "DEATHKNIGHT" }
/// ]
/// ```
///
/// If an id appears twice, the later entry wins.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    cards: HashMap<u32, CardInfo>,
}

impl JsonCatalog {
    /// Builds a catalog from already-parsed records.
    pub fn from_cards(cards: impl IntoIterator<Item = CardInfo>) -> Self {
        let mut map = HashMap::new();
        for card in cards {
            if let Some(previous) = map.insert(card.id, card) {
                tracing::debug!(
                    id = previous.id,
                    "duplicate card id in catalog, keeping the later entry"
                );
            }
        }
        Self { cards: map }
    }

    /// Parses a JSON card list.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] if `json` is not an array of cards.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<CardInfo> = serde_json::from_str(json)?;
        Ok(Self::from_cards(cards))
    }

    /// Reads and parses a JSON card list from disk.
    ///
    /// # Errors
    /// [`CatalogError::Io`] if the file can't be read,
    /// [`CatalogError::Parse`] if its contents aren't a card list.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            cards = catalog.len(),
            "card catalog loaded"
        );
        Ok(catalog)
    }

    /// Number of distinct card ids.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the catalog holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardCatalog for JsonCatalog {
    fn card(&self, id: u32) -> Result<Option<CardInfo>, CatalogError> {
        Ok(self.cards.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &str = r#"[
        { "id": 1, "name": "Wisp", "manaCost": 0, "cardClass": "NEUTRAL" },
        { "id": 2, "name": "Fireball", "manaCost": 4 },
        { "id": 3, "name": "Jaina" }
    ]"#;

    #[test]
    fn test_from_json_str_indexes_by_id() {
        let catalog = JsonCatalog::from_json_str(CARDS).unwrap();
        assert_eq!(catalog.len(), 3);

        let fireball = catalog.card(2).unwrap().unwrap();
        assert_eq!(fireball.name, "Fireball");
        assert_eq!(fireball.mana_cost, Some(4));
        assert!(catalog.card(99).unwrap().is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let catalog = JsonCatalog::from_cards([
            CardInfo::new(5, "Old"),
            CardInfo::new(5, "New"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.card(5).unwrap().unwrap().name, "New");
    }

    #[test]
    fn test_empty_array_is_empty_catalog() {
        let catalog = JsonCatalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_object_instead_of_array_is_parse_error() {
        let err = JsonCatalog::from_json_str(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err =
            JsonCatalog::from_path("/definitely/not/here/cards.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
