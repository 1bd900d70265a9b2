//! # spawn-deck
//!
//! Deck and draw engine for a Zombicide spawn-card companion.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: No UI anywhere. The engine operates on plain
//!    data (cards, spawn points, sessions); rendering lives outside
//!    this crate and consumes [`cards::CardView`]s.
//!
//! 2. **Explicit state**: Deck state, session, and history are owned
//!    values, loaded once at startup and saved after every mutating
//!    call, never process-wide globals.
//!
//! 3. **No-repeat cycles**: Draws are without replacement within a
//!    shuffle cycle. A configuration change or an exhausted deck
//!    starts a fresh cycle; a single draw request never spans two.
//!
//! ## Modules
//!
//! - `cards`: Card data, catalog, JSON loader, mob table, views
//! - `deck`: Availability filter, deck state, reshuffle policy, draws
//! - `spawn`: Spawn points and the Double Spawn cascade resolver
//! - `session`: Session record and the capped draw history
//! - `storage`: Key-value persistence boundary
//! - `companion`: UI-facing facade tying it all together

pub mod cards;
pub mod companion;
pub mod deck;
pub mod session;
pub mod spawn;
pub mod storage;

// Re-export commonly used types
pub use crate::cards::{
    Card, CardCatalog, CardId, CardView, CatalogError, Expansion, Level, MobLine, ZombieType,
};

pub use crate::deck::{
    available_cards, DeckConfig, DeckRng, DeckState, DrawEngine, PersistedDeckState,
};

pub use crate::spawn::{
    resolve_double_spawn, Cascade, CascadeMarker, CascadeReport, SpawnPoint, SpawnPointId,
};

pub use crate::session::{History, HistoryEntry, Session, HISTORY_CAP};

pub use crate::storage::{MemoryStore, StorageError, Store};

pub use crate::companion::Companion;
