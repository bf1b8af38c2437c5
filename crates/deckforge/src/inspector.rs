//! `DeckInspector` builder and inspection pipeline.
//!
//! This is the entry point most callers want. It ties the layers
//! together: deckstring → protocol (`Deck`) → catalog (names) → report.

use deckforge_catalog::{CardCatalog, NullCatalog};
use deckforge_protocol::{decode, CardEntry, Deck};

use crate::report::{DeckReport, ReportCard, ReportHero, ReportSideboard};
use crate::{DeckforgeError, InspectConfig};

/// Builder for configuring a [`DeckInspector`].
///
/// # Example
///
/// ```rust
/// use deckforge::prelude::*;
///
/// let catalog = JsonCatalog::from_cards([CardInfo::new(7, "Jaina")]);
/// let inspector = DeckInspector::builder().catalog(catalog).build();
///
/// let report = inspector.inspect("AAEBAQcBAwAA").unwrap();
/// assert_eq!(report.heroes[0].name, "Jaina");
/// ```
pub struct DeckInspectorBuilder<C> {
    config: InspectConfig,
    catalog: C,
}

impl DeckInspectorBuilder<NullCatalog> {
    /// Creates a builder with the default config and no card data.
    pub fn new() -> Self {
        Self {
            config: InspectConfig::default(),
            catalog: NullCatalog,
        }
    }
}

impl Default for DeckInspectorBuilder<NullCatalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CardCatalog> DeckInspectorBuilder<C> {
    /// Sets the inspector configuration.
    pub fn config(mut self, config: InspectConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets where card names come from. Replaces any previous catalog.
    pub fn catalog<D: CardCatalog>(self, catalog: D) -> DeckInspectorBuilder<D> {
        DeckInspectorBuilder {
            config: self.config,
            catalog,
        }
    }

    /// Finishes configuration.
    pub fn build(self) -> DeckInspector<C> {
        DeckInspector {
            config: self.config,
            catalog: self.catalog,
        }
    }
}

/// Decodes deckstrings and annotates them with card data.
///
/// The inspector holds no per-call state, so one instance can serve any
/// number of inspections, from any number of threads.
pub struct DeckInspector<C: CardCatalog> {
    config: InspectConfig,
    catalog: C,
}

impl DeckInspector<NullCatalog> {
    /// Creates a builder.
    pub fn builder() -> DeckInspectorBuilder<NullCatalog> {
        DeckInspectorBuilder::new()
    }
}

impl<C: CardCatalog> DeckInspector<C> {
    /// The active configuration.
    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    /// Decodes a deckstring and builds a report for it.
    ///
    /// Catalog lookups never fail the inspection: an id the catalog
    /// doesn't know, or can't answer for, gets
    /// [`InspectConfig::unknown_card_name`].
    ///
    /// # Errors
    /// Returns [`DeckforgeError::Deckstring`] if the string can't be
    /// decoded.
    pub fn inspect(&self, deckstring: &str) -> Result<DeckReport, DeckforgeError> {
        tracing::debug!(len = deckstring.len(), "inspecting deckstring");

        let deck = decode(deckstring).inspect_err(|e| {
            tracing::debug!(error = %e, "deckstring rejected");
        })?;

        tracing::info!(
            format = %deck.format(),
            cards = deck.total_cards(),
            sideboards = deck.sideboards().len(),
            "deckstring decoded"
        );

        Ok(self.report(&deck))
    }

    /// Builds a report for an already-decoded deck.
    pub fn report(&self, deck: &Deck) -> DeckReport {
        let heroes = deck
            .heroes()
            .iter()
            .map(|&id| ReportHero {
                id,
                name: self.name_of(id).0,
            })
            .collect();

        let cards = deck
            .cards()
            .iter()
            .map(|entry| self.report_card(*entry))
            .collect();

        let sideboards = if self.config.include_sideboards {
            deck.sideboard_owners()
                .into_iter()
                .map(|owner| ReportSideboard {
                    owner,
                    owner_name: self.name_of(owner).0,
                    cards: deck
                        .sideboard_for(owner)
                        .map(|s| {
                            self.report_card(CardEntry {
                                id: s.id,
                                count: s.count,
                            })
                        })
                        .collect(),
                })
                .collect()
        } else {
            Vec::new()
        };

        DeckReport {
            format: deck.format(),
            heroes,
            cards,
            total_cards: deck.total_cards(),
            sideboards,
        }
    }

    fn report_card(&self, entry: CardEntry) -> ReportCard {
        let (name, mana_cost) = self.name_of(entry.id);
        ReportCard {
            id: entry.id,
            count: entry.count,
            name,
            mana_cost,
        }
    }

    /// Name and mana cost for `id`, falling back to the placeholder.
    fn name_of(&self, id: u32) -> (String, Option<u32>) {
        match self.catalog.card(id) {
            Ok(Some(info)) => (info.name, info.mana_cost),
            Ok(None) => (self.config.unknown_card_name.clone(), None),
            Err(e) => {
                tracing::warn!(id, error = %e, "card lookup failed");
                (self.config.unknown_card_name.clone(), None)
            }
        }
    }
}
