//! Card system: card data, catalog, JSON loader, mob table, views.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for spawn cards
//! - `Level`: Difficulty tier (Blue through Red)
//! - `Expansion`: Content-set tag derived at load time
//! - `Card`: Static spawn-card data
//! - `ZombieType`: Mob table with per-card count accessors
//! - `CardCatalog`: Immutable card lookup, built once at startup
//! - `CardView`: Pure display model for one card

pub mod card;
pub mod catalog;
pub mod loader;
pub mod view;
pub mod zombies;

pub use card::{Card, CardId, Expansion, Level};
pub use catalog::{CardCatalog, CatalogError};
pub use view::{CardView, MobLine};
pub use zombies::ZombieType;
