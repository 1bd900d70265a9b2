//! Deck system: availability filtering, deck state, reshuffle policy,
//! draws.
//!
//! ## Key Types
//!
//! - `DeckConfig`: The (level, Wolfz toggle) pair a deck is scoped to
//! - `DeckState`: Drawn-card record for one shuffle cycle
//! - `PersistedDeckState`: Round-trip form for the key-value store
//! - `DrawEngine`: Stateful draws without replacement
//! - `DeckRng`: Deterministic draw randomness
//! - `available_cards`: Pure eligibility filter

pub mod engine;
pub mod rng;
pub mod state;

pub use engine::{available_cards, DrawEngine};
pub use rng::DeckRng;
pub use state::{DeckConfig, DeckState, PersistedDeckState};
