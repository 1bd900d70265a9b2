//! Session and history: what the companion remembers between visits.
//!
//! ## Key Types
//!
//! - `Session`: Hero level, Wolfz toggle, ordered spawn points
//! - `History`: Append-only draw log, capped at `HISTORY_CAP`
//! - `HistoryEntry`: One logged draw outcome

pub mod history;
pub mod state;

pub use history::{History, HistoryEntry, HISTORY_CAP};
pub use state::Session;
