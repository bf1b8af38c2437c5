//! Human- and machine-readable views of a decoded deck.
//!
//! A [`DeckReport`] is a [`Deck`](deckforge_protocol::Deck) with names
//! attached. It serializes to JSON for tools and implements `Display` for
//! people. Entry order is exactly the decoded deck's order.

use std::fmt;

use deckforge_protocol::Format;
use serde::Serialize;

/// A hero line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHero {
    pub id: u32,
    pub name: String,
}

/// A card line, in the main deck or a sideboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCard {
    pub id: u32,
    pub count: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<u32>,
}

/// All sideboard lines that belong to one owner card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSideboard {
    pub owner: u32,
    pub owner_name: String,
    pub cards: Vec<ReportCard>,
}

/// An annotated deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckReport {
    pub format: Format,
    pub heroes: Vec<ReportHero>,
    pub cards: Vec<ReportCard>,
    pub total_cards: u64,
    /// Empty (and left out of the JSON) when the deck has no sideboards
    /// or the inspector was configured to skip them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sideboards: Vec<ReportSideboard>,
}

impl DeckReport {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ReportCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mana_cost {
            Some(cost) => write!(f, "{}x ({}) {}", self.count, cost, self.name),
            None => write!(f, "{}x {}", self.count, self.name),
        }
    }
}

/// Renders a plain-text deck listing:
///
/// ```text
/// Format: wild
/// Hero: The Lich King (101648)
///
/// 2x (1) Some Card
/// 1x (3) Another Card
///
/// Total: 3 cards
///
/// Sideboard: Owner Card (90749)
///   1x (2) Side Card
/// ```
impl fmt::Display for DeckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Format: {}", self.format)?;
        for hero in &self.heroes {
            writeln!(f, "Hero: {} ({})", hero.name, hero.id)?;
        }
        writeln!(f)?;

        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        writeln!(f)?;
        write!(f, "Total: {} cards", self.total_cards)?;

        for sideboard in &self.sideboards {
            writeln!(f)?;
            writeln!(f)?;
            write!(
                f,
                "Sideboard: {} ({})",
                sideboard.owner_name, sideboard.owner
            )?;
            for card in &sideboard.cards {
                writeln!(f)?;
                write!(f, "  {card}")?;
            }
        }
        Ok(())
    }
}
