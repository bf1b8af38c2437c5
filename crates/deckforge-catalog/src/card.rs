//! The card record a catalog hands back.

use serde::{Deserialize, Serialize};

/// Display attributes for one card id.
///
/// `#[serde(rename_all = "camelCase")]` matches the key style of public
/// card data dumps: `manaCost`, `cardClass`. Optional fields may be absent
/// from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    /// Card database id (the number stored in deckstrings).
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Mana cost, if the card has one (heroes often don't).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<u32>,

    /// Class the card belongs to, e.g. `"MAGE"` or `"NEUTRAL"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_class: Option<String>,
}

impl CardInfo {
    /// Creates a record with just an id and a name.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mana_cost: None,
            card_class: None,
        }
    }

    /// Sets the mana cost.
    pub fn with_mana_cost(mut self, cost: u32) -> Self {
        self.mana_cost = Some(cost);
        self
    }

    /// Sets the card class.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.card_class = Some(class.into());
        self
    }
}
