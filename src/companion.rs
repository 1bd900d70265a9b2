//! The companion facade - what the UI talks to.
//!
//! `Companion` wires the draw engine, session, history, and store
//! together. Every mutating call updates in-memory state first, then
//! persists all three records. Loads happen once in the constructor;
//! corrupt snapshots fall back to fresh defaults.

use crate::cards::{Card, CardCatalog, CardId, Level};
use crate::deck::{DeckConfig, DeckRng, DeckState, DrawEngine};
use crate::session::{History, HistoryEntry, Session};
use crate::spawn::{resolve_double_spawn, CascadeReport, SpawnPointId};
use crate::storage::{self, Store};

/// UI-facing facade over the whole engine.
///
/// ## Example
///
/// ```
/// use spawn_deck::cards::{Card, CardCatalog, CardId, Level, ZombieType};
/// use spawn_deck::companion::Companion;
/// use spawn_deck::storage::MemoryStore;
///
/// let cards = (1..=10).map(|id| {
///     Card::new(CardId::new(id), Level::Blue).with_count(ZombieType::Walker, 2)
/// });
/// let catalog = CardCatalog::from_cards(cards).unwrap();
///
/// let mut companion = Companion::new(catalog, MemoryStore::new());
/// companion.spawn_all(1_700_000_000_000);
///
/// assert!(companion.session().spawn_points.iter().all(|p| p.has_cards()));
/// assert_eq!(companion.history().len(), 3);
/// ```
pub struct Companion<S: Store> {
    engine: DrawEngine,
    session: Session,
    history: History,
    store: S,
}

impl<S: Store> Companion<S> {
    /// Restore a companion from the store, or start fresh.
    pub fn new(catalog: CardCatalog, store: S) -> Self {
        Self::with_rng(catalog, store, DeckRng::from_entropy())
    }

    /// Restore with a caller-supplied RNG (fixed seeds for tests).
    pub fn with_rng(catalog: CardCatalog, store: S, rng: DeckRng) -> Self {
        let session = storage::load_session(&store).unwrap_or_default();
        let mut engine = DrawEngine::with_rng(catalog, session.config(), rng);
        if let Some(state) = storage::load_deck_state(&store) {
            engine.restore_state(state);
        }
        let history = storage::load_history(&store).unwrap_or_default();
        Self {
            engine,
            session,
            history,
            store,
        }
    }

    /// The current session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The draw history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Deck state for the running cycle (display and debugging).
    #[must_use]
    pub fn deck_state(&self) -> &DeckState {
        self.engine.state()
    }

    /// The active deck configuration.
    #[must_use]
    pub fn config(&self) -> DeckConfig {
        self.engine.config()
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        self.engine.catalog()
    }

    /// Look up a card for display.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.engine.catalog().get(id)
    }

    /// Hand the backing store back, consuming the companion.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Re-resolve every spawn point's saved assignment.
    ///
    /// Stale card IDs drop out; spawn points left with nothing (fresh
    /// sessions included) draw one card. Restores do not touch the
    /// history.
    pub fn restore_assignments(&mut self) {
        for index in 0..self.session.spawn_points.len() {
            let ids: Vec<CardId> = self.session.spawn_points[index].cards.to_vec();
            self.engine
                .assign_by_id(&mut self.session.spawn_points[index], &ids);
        }
        self.save();
    }

    /// Draw one card for every spawn point, then resolve Double Spawn
    /// cascades across the whole order.
    ///
    /// Records one history entry per spawn point with its final,
    /// post-cascade assignment; all entries share a spawn-session ID.
    pub fn spawn_all(&mut self, timestamp: u64) -> CascadeReport {
        for index in 0..self.session.spawn_points.len() {
            let cards = self.engine.draw(1);
            self.session.spawn_points[index].assign(&cards);
        }
        let report = resolve_double_spawn(&mut self.engine, &mut self.session.spawn_points);
        self.record_spawn_pass(timestamp);
        self.save();
        report
    }

    /// Redraw a single spawn point.
    ///
    /// No cascade pass runs here; call [`Self::resolve_double_spawn`]
    /// for that. Returns the drawn cards, or `None` for an unknown ID.
    pub fn draw_for(&mut self, id: SpawnPointId, timestamp: u64) -> Option<Vec<Card>> {
        let index = self.session.spawn_points.iter().position(|point| point.id == id)?;
        let cards = self.engine.draw(1);
        self.session.spawn_points[index].assign(&cards);
        self.session.spawn_points[index].marker = None;

        let entry = HistoryEntry {
            id: self.history.next_entry_id(),
            spawn_point: self.session.spawn_points[index].title.clone(),
            cards: cards.iter().map(|card| card.id).collect(),
            timestamp,
            hero_level: self.session.hero_level,
            wolfz_enabled: self.session.wolfz_enabled,
            spawn_session_id: self.history.next_spawn_session_id(),
        };
        self.history.record(entry);
        self.save();
        Some(cards)
    }

    /// Run the Double Spawn resolver over the current order.
    ///
    /// Cascade targets get history entries for their new assignments.
    pub fn resolve_double_spawn(&mut self, timestamp: u64) -> CascadeReport {
        let report = resolve_double_spawn(&mut self.engine, &mut self.session.spawn_points);
        if report.any() {
            let spawn_session_id = self.history.next_spawn_session_id();
            for cascade in &report.cascades {
                let Some(point) = self.session.spawn_point(cascade.target) else {
                    continue;
                };
                let entry = HistoryEntry {
                    id: self.history.next_entry_id(),
                    spawn_point: point.title.clone(),
                    cards: point.cards.to_vec(),
                    timestamp,
                    hero_level: self.session.hero_level,
                    wolfz_enabled: self.session.wolfz_enabled,
                    spawn_session_id,
                };
                self.history.record(entry);
            }
        }
        self.save();
        report
    }

    /// Change the hero level. Every spawn point redraws under the new
    /// configuration.
    pub fn set_hero_level(&mut self, level: Level, timestamp: u64) -> CascadeReport {
        self.session.hero_level = level;
        self.engine.set_config(self.session.config());
        self.spawn_all(timestamp)
    }

    /// Toggle the Wolfz expansion. Every spawn point redraws.
    pub fn set_wolfz_enabled(&mut self, enabled: bool, timestamp: u64) -> CascadeReport {
        self.session.wolfz_enabled = enabled;
        self.engine.set_config(self.session.config());
        self.spawn_all(timestamp)
    }

    /// Add a spawn point at the end of the order and draw its first
    /// card.
    pub fn add_spawn_point(&mut self, title: Option<String>, timestamp: u64) -> SpawnPointId {
        let id = self.session.add_spawn_point(title);
        let cards = self.engine.draw(1);
        let point = self
            .session
            .spawn_point_mut(id)
            .expect("spawn point was just added");
        point.assign(&cards);
        let title = point.title.clone();

        let entry = HistoryEntry {
            id: self.history.next_entry_id(),
            spawn_point: title,
            cards: cards.iter().map(|card| card.id).collect(),
            timestamp,
            hero_level: self.session.hero_level,
            wolfz_enabled: self.session.wolfz_enabled,
            spawn_session_id: self.history.next_spawn_session_id(),
        };
        self.history.record(entry);
        self.save();
        id
    }

    /// Remove a spawn point. Returns false when the ID is unknown.
    pub fn remove_spawn_point(&mut self, id: SpawnPointId) -> bool {
        let removed = self.session.remove_spawn_point(id);
        if removed {
            self.save();
        }
        removed
    }

    /// Reorder: move the point at visual index `from` to `to`.
    pub fn move_spawn_point(&mut self, from: usize, to: usize) {
        self.session.move_spawn_point(from, to);
        self.save();
    }

    /// Rename a spawn point.
    pub fn rename_spawn_point(&mut self, id: SpawnPointId, title: impl Into<String>) {
        self.session.rename_spawn_point(id, title);
        self.save();
    }

    /// Clear the persisted session and deck state and start fresh.
    ///
    /// The history is retained; it is capped, not session-scoped.
    pub fn reset(&mut self) {
        self.store.remove(storage::SESSION_KEY);
        self.store.remove(storage::DECK_STATE_KEY);
        self.session = Session::default();
        self.engine.set_config(self.session.config());
        self.engine.restore_state(DeckState::new(self.session.config()));
        self.save();
    }

    fn record_spawn_pass(&mut self, timestamp: u64) {
        let spawn_session_id = self.history.next_spawn_session_id();
        for index in 0..self.session.spawn_points.len() {
            let point = &self.session.spawn_points[index];
            let entry = HistoryEntry {
                id: self.history.next_entry_id(),
                spawn_point: point.title.clone(),
                cards: point.cards.to_vec(),
                timestamp,
                hero_level: self.session.hero_level,
                wolfz_enabled: self.session.wolfz_enabled,
                spawn_session_id,
            };
            self.history.record(entry);
        }
    }

    fn save(&mut self) {
        storage::save_session(&mut self.store, &self.session);
        storage::save_deck_state(&mut self.store, self.engine.state());
        storage::save_history(&mut self.store, &self.history);
    }
}
