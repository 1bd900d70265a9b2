//! Draw engine - availability filtering, reshuffle policy, draws.
//!
//! ## Reshuffle policy
//!
//! Evaluated before every draw request:
//!
//! 1. The requested configuration differs from the deck state's:
//!    discard the state and start a fresh cycle under the new
//!    configuration.
//! 2. Otherwise, if every eligible card has been drawn, start a fresh
//!    cycle under the same configuration.
//! 3. Otherwise the state is untouched.
//!
//! Within one cycle no card is drawn twice. A single draw request
//! never spans two cycles: over-asking returns fewer cards instead of
//! reshuffling mid-draw.

use rustc_hash::FxHashSet;

use crate::cards::{Card, CardCatalog, CardId, Expansion};
use crate::spawn::SpawnPoint;

use super::rng::DeckRng;
use super::state::{DeckConfig, DeckState};

/// Cards eligible for drawing under a configuration.
///
/// Level filter first, then the expansion toggle: Wolfz enabled keeps
/// base and Wolfz cards, disabled keeps base only. Other-set cards are
/// never eligible. Pure; results come back in ID order.
#[must_use]
pub fn available_cards(catalog: &CardCatalog, config: DeckConfig) -> Vec<&Card> {
    catalog
        .cards_at_level(config.level)
        .filter(|card| match card.expansion {
            Expansion::Base => true,
            Expansion::Wolfz => config.wolfz_enabled,
            Expansion::Other => false,
        })
        .collect()
}

/// Stateful draw engine.
///
/// Owns the catalog, the active configuration, the deck state for the
/// running shuffle cycle, and the RNG. All deck mutation happens inside
/// `draw`; callers persist the state after each mutating call.
///
/// ## Example
///
/// ```
/// use spawn_deck::cards::{Card, CardCatalog, CardId, Level, ZombieType};
/// use spawn_deck::deck::{DeckConfig, DeckRng, DrawEngine};
///
/// let cards = (1..=6).map(|id| {
///     Card::new(CardId::new(id), Level::Blue).with_count(ZombieType::Walker, 2)
/// });
/// let catalog = CardCatalog::from_cards(cards).unwrap();
/// let mut engine = DrawEngine::with_rng(catalog, DeckConfig::default(), DeckRng::new(42));
///
/// // A full cycle never repeats a card.
/// let mut seen = std::collections::HashSet::new();
/// for _ in 0..6 {
///     let card = engine.draw(1).remove(0);
///     assert!(seen.insert(card.id));
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DrawEngine {
    catalog: CardCatalog,
    config: DeckConfig,
    state: DeckState,
    rng: DeckRng,
}

impl DrawEngine {
    /// Engine with an entropy-seeded RNG.
    #[must_use]
    pub fn new(catalog: CardCatalog, config: DeckConfig) -> Self {
        Self::with_rng(catalog, config, DeckRng::from_entropy())
    }

    /// Engine with a caller-supplied RNG (fixed seeds for tests).
    #[must_use]
    pub fn with_rng(catalog: CardCatalog, config: DeckConfig, rng: DeckRng) -> Self {
        let state = DeckState::new(config);
        Self {
            catalog,
            config,
            state,
            rng,
        }
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> DeckConfig {
        self.config
    }

    /// Deck state for the running cycle (display and debugging).
    #[must_use]
    pub fn state(&self) -> &DeckState {
        &self.state
    }

    /// Change the active configuration.
    ///
    /// The reshuffle itself happens lazily on the next draw.
    pub fn set_config(&mut self, config: DeckConfig) {
        self.config = config;
    }

    /// Replace the deck state with a restored snapshot.
    ///
    /// Drawn IDs that are not eligible under the snapshot's own
    /// configuration are pruned.
    pub fn restore_state(&mut self, mut state: DeckState) {
        let eligible: FxHashSet<CardId> = available_cards(&self.catalog, state.config())
            .iter()
            .map(|card| card.id)
            .collect();
        state.prune(|id| eligible.contains(&id));
        self.state = state;
    }

    /// Number of cards eligible under the active configuration.
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        available_cards(&self.catalog, self.config).len()
    }

    /// Number of eligible cards not yet drawn in the running cycle.
    #[must_use]
    pub fn undrawn_count(&self) -> usize {
        available_cards(&self.catalog, self.state.config())
            .iter()
            .filter(|card| !self.state.is_drawn(card.id))
            .count()
    }

    /// Apply the reshuffle policy ahead of a draw.
    fn ensure_cycle(&mut self) {
        if self.state.config() != self.config {
            log::debug!(
                "reshuffle: configuration changed to level {} (wolfz {})",
                self.config.level,
                self.config.wolfz_enabled
            );
            self.state = DeckState::new(self.config);
            return;
        }

        let eligible = available_cards(&self.catalog, self.config);
        if !eligible.is_empty() && eligible.iter().all(|card| self.state.is_drawn(card.id)) {
            log::debug!("reshuffle: all {} eligible cards drawn", eligible.len());
            self.state.reset();
        }
    }

    /// Draw up to `count` cards without replacement.
    ///
    /// Returns fewer cards than requested when the undrawn subset runs
    /// dry mid-loop, and an empty vec when nothing is eligible at all
    /// (empty catalog, or no cards match the configuration). Both are
    /// normal states, not errors.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        self.ensure_cycle();

        let Self {
            catalog,
            state,
            rng,
            ..
        } = self;

        let mut undrawn: Vec<&Card> = available_cards(catalog, state.config())
            .into_iter()
            .filter(|card| !state.is_drawn(card.id))
            .collect();

        let mut drawn = Vec::new();
        for _ in 0..count {
            if undrawn.is_empty() {
                break;
            }
            let index = rng.gen_range_usize(0..undrawn.len());
            let card = undrawn.swap_remove(index);
            state.mark_drawn(card.id);
            drawn.push(card.clone());
        }
        drawn
    }

    /// Resolve `ids` against the catalog and assign them to a spawn
    /// point.
    ///
    /// Unknown IDs are dropped silently. If none survive (or `ids` is
    /// empty), falls back to drawing one fresh card. Returns the cards
    /// actually assigned.
    pub fn assign_by_id(&mut self, point: &mut SpawnPoint, ids: &[CardId]) -> Vec<Card> {
        let mut cards: Vec<Card> = ids
            .iter()
            .filter_map(|id| self.catalog.get(*id).cloned())
            .collect();
        if cards.is_empty() {
            cards = self.draw(1);
        }
        point.assign(&cards);
        cards
    }
}
