//! Persistence boundary - a localStorage-shaped key-value store.
//!
//! The engine persists three records, each JSON-encoded under a
//! well-known key: the session, the deck state, and the draw history.
//! Loads treat corrupt values as absent, so the companion starts fresh
//! instead of failing. Writes may fail; in-memory state is then ahead
//! of the snapshot until the next successful save.
//!
//! ## Key Types
//!
//! - `Store`: String key-value backend trait
//! - `MemoryStore`: In-memory implementation for tests and embedding
//! - `StorageError`: A rejected write

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::deck::{DeckState, PersistedDeckState};
use crate::session::{History, Session};

/// Key for the persisted session.
pub const SESSION_KEY: &str = "zombicide-session";
/// Key for the persisted deck state.
pub const DECK_STATE_KEY: &str = "zombicide-deck-state";
/// Key for the persisted draw history.
pub const HISTORY_KEY: &str = "zombicide-history";

/// A write was rejected by the backing store.
#[derive(Debug, Error)]
#[error("store rejected write to {key}: {reason}")]
pub struct StorageError {
    pub key: String,
    pub reason: String,
}

impl StorageError {
    /// Create a new error for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// String key-value backend.
///
/// Implementations wrap whatever durable storage the host has: browser
/// local storage, a file, a test map.
pub trait Store {
    /// Read a value. `None` for missing keys.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Seed a raw value, bypassing encoding (corrupt-state tests).
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

fn load<T: DeserializeOwned>(store: &dyn Store, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding corrupt value under {key}: {err}");
            None
        }
    }
}

fn save<T: Serialize>(store: &mut dyn Store, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(err) => {
            log::warn!("failed to encode value for {key}: {err}");
            return;
        }
    };
    if let Err(err) = store.set(key, &encoded) {
        log::warn!("save skipped: {err}");
    }
}

/// Load the persisted session, if any.
pub fn load_session(store: &dyn Store) -> Option<Session> {
    load(store, SESSION_KEY)
}

/// Persist the session.
pub fn save_session(store: &mut dyn Store, session: &Session) {
    save(store, SESSION_KEY, session);
}

/// Load the persisted deck state, if any.
pub fn load_deck_state(store: &dyn Store) -> Option<DeckState> {
    load::<PersistedDeckState>(store, DECK_STATE_KEY).map(DeckState::from)
}

/// Persist the deck state.
pub fn save_deck_state(store: &mut dyn Store, state: &DeckState) {
    save(store, DECK_STATE_KEY, &PersistedDeckState::from(state));
}

/// Load the persisted draw history, if any.
pub fn load_history(store: &dyn Store) -> Option<History> {
    load(store, HISTORY_KEY)
}

/// Persist the draw history.
pub fn save_history(store: &mut dyn Store, history: &History) {
    save(store, HISTORY_KEY, history);
}
