//! Draw history - append-only log of what each spawn point received.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Level};

/// Most-recent entries kept; the oldest fall off first.
pub const HISTORY_CAP: usize = 500;

/// One logged draw outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    /// Spawn-point title at the time of the draw.
    pub spawn_point: String,
    pub cards: Vec<CardId>,
    /// Caller-supplied wall-clock milliseconds. The engine never reads
    /// a clock itself.
    pub timestamp: u64,
    pub hero_level: Level,
    pub wolfz_enabled: bool,
    /// Groups entries recorded by one spawn pass.
    pub spawn_session_id: u64,
}

/// Append-only, capped draw log.
///
/// `im::Vector` keeps appends and front-drops cheap without cloning
/// the whole log. Serializes as a bare array of entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vector<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, dropping the oldest past the cap.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        let len = self.entries.len();
        if len > HISTORY_CAP {
            self.entries = self.entries.skip(len - HISTORY_CAP);
        }
    }

    /// Next unused entry ID. Monotonic across the cap and across
    /// persistence round trips.
    #[must_use]
    pub fn next_entry_id(&self) -> u64 {
        self.entries.last().map_or(0, |entry| entry.id + 1)
    }

    /// Next unused spawn-session ID.
    #[must_use]
    pub fn next_spawn_session_id(&self) -> u64 {
        self.entries.last().map_or(0, |entry| entry.spawn_session_id + 1)
    }

    /// Number of retained entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent `n` entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev().take(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, spawn_session_id: u64) -> HistoryEntry {
        HistoryEntry {
            id,
            spawn_point: format!("Spawn Point {id}"),
            cards: vec![CardId::new(1)],
            timestamp: 1_700_000_000_000 + id,
            hero_level: Level::Blue,
            wolfz_enabled: true,
            spawn_session_id,
        }
    }

    #[test]
    fn test_record_and_iterate() {
        let mut history = History::new();
        history.record(entry(0, 0));
        history.record(entry(1, 0));

        assert_eq!(history.len(), 2);
        let ids: Vec<u64> = history.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_cap_drops_oldest_first() {
        let mut history = History::new();
        for id in 0..(HISTORY_CAP as u64 + 10) {
            history.record(entry(id, 0));
        }

        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history.iter().next().unwrap().id, 10);
        assert_eq!(history.next_entry_id(), HISTORY_CAP as u64 + 10);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut history = History::new();
        for id in 0..5 {
            history.record(entry(id, 0));
        }

        let ids: Vec<u64> = history.recent(3).map(|entry| entry.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn test_session_id_advances() {
        let mut history = History::new();
        assert_eq!(history.next_spawn_session_id(), 0);

        history.record(entry(0, 0));
        history.record(entry(1, 0));
        assert_eq!(history.next_spawn_session_id(), 1);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut history = History::new();
        history.record(entry(0, 0));

        let value = serde_json::to_value(&history).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["spawnPoint"], "Spawn Point 0");
        assert_eq!(value[0]["heroLevel"], 1);
        assert_eq!(value[0]["spawnSessionId"], 0);

        let restored: History = serde_json::from_value(value).unwrap();
        assert_eq!(restored, history);
    }
}
