//! Catalog loading from the JSON card document.
//!
//! The companion ships its card data as one JSON document, converted
//! offline from the spawn-card spreadsheet:
//!
//! ```json
//! {
//!   "metadata": { "levels": [...], "zombieTypes": [...] },
//!   "cards": [ { "id": 1, "level": 1, "walker": 2, ... } ],
//!   "stats": { ... }
//! }
//! ```
//!
//! Only the `cards` array matters here. A `levelName` or `expansion`
//! field in the document is ignored; both are derived at load time so
//! the data cannot drift from the rules.

use serde::Deserialize;

use super::card::{Card, CardId, Expansion, Level};
use super::catalog::{CardCatalog, CatalogError};

/// One card record as it appears in the document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    id: u32,
    level: u8,
    #[serde(default)]
    nothing: u32,
    #[serde(default)]
    walker: u32,
    #[serde(default)]
    fatty: u32,
    #[serde(default)]
    runner: u32,
    #[serde(default)]
    abomination: u32,
    #[serde(default)]
    wolfz: u32,
    #[serde(default)]
    wolfbomination: u32,
    #[serde(default)]
    npc: u32,
    #[serde(default)]
    deadeye_walkers: u32,
    #[serde(default)]
    murder_of_crowz: u32,
    #[serde(default)]
    necromancer: u32,
    #[serde(default)]
    double_spawn: Option<String>,
    #[serde(default)]
    extra_activation: Option<String>,
    #[serde(default)]
    special_necromancer: Option<String>,
    #[serde(default)]
    special_abomination: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    cards: Vec<RawCard>,
}

impl RawCard {
    /// Content-set classification from the populated fields.
    ///
    /// Wolf counts win over everything else, so a card that spawns
    /// wolves disappears when the Wolfz toggle is off. Base-game counts
    /// (nothing included) or the Double Spawn / Extra Activation
    /// markers classify as base. Cards made up purely of guest mobs
    /// (NPCs, deadeyes, crows, necromancers) fall through to `Other`.
    fn expansion(&self) -> Expansion {
        if self.wolfz > 0 || self.wolfbomination > 0 {
            return Expansion::Wolfz;
        }
        let base_counts = self.nothing > 0
            || self.walker > 0
            || self.fatty > 0
            || self.runner > 0
            || self.abomination > 0;
        if base_counts || self.double_spawn.is_some() || self.extra_activation.is_some() {
            return Expansion::Base;
        }
        Expansion::Other
    }

    fn into_card(self) -> Result<Card, CatalogError> {
        let level = Level::from_id(self.level).ok_or(CatalogError::InvalidLevel {
            id: self.id,
            level: self.level,
        })?;
        let expansion = self.expansion();
        Ok(Card {
            id: CardId::new(self.id),
            level,
            nothing: self.nothing,
            walker: self.walker,
            fatty: self.fatty,
            runner: self.runner,
            abomination: self.abomination,
            wolfz: self.wolfz,
            wolfbomination: self.wolfbomination,
            npc: self.npc,
            deadeye_walkers: self.deadeye_walkers,
            murder_of_crowz: self.murder_of_crowz,
            necromancer: self.necromancer,
            double_spawn: self.double_spawn,
            extra_activation: self.extra_activation,
            special_necromancer: self.special_necromancer,
            special_abomination: self.special_abomination,
            expansion,
        })
    }
}

impl CardCatalog {
    /// Parse a catalog from the JSON card document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let cards = document
            .cards
            .into_iter()
            .map(RawCard::into_card)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(cards)
    }
}
