//! Deck state - which cards have been drawn this shuffle cycle.
//!
//! A `DeckState` is scoped to one `DeckConfig`. Changing configuration
//! discards the state wholesale rather than carrying drawn IDs across
//! configurations, so every drawn ID stays eligible under the state's
//! own configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Level};

/// The (level, expansion-toggle) pair a deck is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub level: Level,
    pub wolfz_enabled: bool,
}

impl DeckConfig {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(level: Level, wolfz_enabled: bool) -> Self {
        Self { level, wolfz_enabled }
    }
}

impl Default for DeckConfig {
    /// Level Blue with Wolfz enabled, the companion's starting setup.
    fn default() -> Self {
        Self::new(Level::Blue, true)
    }
}

/// Drawn-card record for one shuffle cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckState {
    config: DeckConfig,
    drawn: FxHashSet<CardId>,
}

impl DeckState {
    /// Fresh state (nothing drawn) for a configuration.
    #[must_use]
    pub fn new(config: DeckConfig) -> Self {
        Self {
            config,
            drawn: FxHashSet::default(),
        }
    }

    /// The configuration this state was built for.
    #[must_use]
    pub fn config(&self) -> DeckConfig {
        self.config
    }

    /// Number of cards drawn this cycle.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// Check if a card was drawn this cycle.
    #[must_use]
    pub fn is_drawn(&self, id: CardId) -> bool {
        self.drawn.contains(&id)
    }

    /// Record a card as drawn in the current cycle.
    pub fn mark_drawn(&mut self, id: CardId) {
        self.drawn.insert(id);
    }

    /// Drop every drawn ID, starting a new cycle under the same
    /// configuration.
    pub fn reset(&mut self) {
        self.drawn.clear();
    }

    /// Drop drawn IDs the predicate rejects.
    ///
    /// Used when restoring a persisted state, so no drawn ID outlives
    /// its eligibility after catalog or data changes.
    pub fn prune(&mut self, eligible: impl Fn(CardId) -> bool) {
        self.drawn.retain(|&id| eligible(id));
    }

    /// Drawn IDs in ascending order.
    #[must_use]
    pub fn drawn_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<CardId> = self.drawn.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Round-trip form of `DeckState` for the key-value store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDeckState {
    pub drawn_card_ids: Vec<u32>,
    pub current_level: Level,
    pub current_wolfz_setting: bool,
}

impl From<&DeckState> for PersistedDeckState {
    fn from(state: &DeckState) -> Self {
        Self {
            drawn_card_ids: state.drawn_ids().iter().map(|id| id.raw()).collect(),
            current_level: state.config.level,
            current_wolfz_setting: state.config.wolfz_enabled,
        }
    }
}

impl From<PersistedDeckState> for DeckState {
    fn from(persisted: PersistedDeckState) -> Self {
        let mut state = DeckState::new(DeckConfig::new(
            persisted.current_level,
            persisted.current_wolfz_setting,
        ));
        for id in persisted.drawn_card_ids {
            state.mark_drawn(CardId::new(id));
        }
        state
    }
}
