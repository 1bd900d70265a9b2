//! Spawn points - the board locations cards are dealt to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};

/// Stable identifier for a spawn point.
///
/// Displays as `spawn-{n}`, the companion's element-ID scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpawnPointId(pub u32);

impl SpawnPointId {
    /// Create a new spawn point ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SpawnPointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spawn-{}", self.0)
    }
}

/// How a spawn point participated in the last cascade run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeMarker {
    /// Held a Double Spawn card; spawns nothing further this round.
    Source,
    /// Received doubled cards from the preceding point.
    Target,
}

/// One spawn point.
///
/// Owned by the UI; the engine only reads and replaces `cards`.
/// Position in the session's spawn-point list is the visual order and
/// decides cascade routing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub id: SpawnPointId,
    pub title: String,
    /// Assigned cards, in draw order. One card normally; more only as
    /// a cascade target. Inline storage covers the common 0-2 case.
    #[serde(rename = "cardIds")]
    pub cards: SmallVec<[CardId; 2]>,
    /// Cascade display state from the last resolver run.
    #[serde(skip)]
    pub marker: Option<CascadeMarker>,
}

impl SpawnPoint {
    /// New spawn point with no cards assigned.
    #[must_use]
    pub fn new(id: SpawnPointId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cards: SmallVec::new(),
            marker: None,
        }
    }

    /// Replace the assignment with `cards`. Never appends.
    pub fn assign(&mut self, cards: &[Card]) {
        self.cards = cards.iter().map(|card| card.id).collect();
    }

    /// Drop the assignment.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Whether any card is assigned.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Level;

    #[test]
    fn test_id_display() {
        assert_eq!(SpawnPointId::new(4).to_string(), "spawn-4");
    }

    #[test]
    fn test_assign_replaces() {
        let mut point = SpawnPoint::new(SpawnPointId::new(1), "Spawn Point 1");
        point.assign(&[Card::new(CardId::new(1), Level::Blue)]);
        point.assign(&[
            Card::new(CardId::new(2), Level::Blue),
            Card::new(CardId::new(3), Level::Blue),
        ]);

        assert_eq!(point.cards.as_slice(), &[CardId::new(2), CardId::new(3)]);
    }

    #[test]
    fn test_clear() {
        let mut point = SpawnPoint::new(SpawnPointId::new(1), "Spawn Point 1");
        point.assign(&[Card::new(CardId::new(1), Level::Blue)]);
        assert!(point.has_cards());

        point.clear();
        assert!(!point.has_cards());
    }

    #[test]
    fn test_serde_shape() {
        let mut point = SpawnPoint::new(SpawnPointId::new(2), "Alley");
        point.assign(&[Card::new(CardId::new(9), Level::Blue)]);
        point.marker = Some(CascadeMarker::Source);

        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["id"], 2);
        assert_eq!(value["title"], "Alley");
        assert_eq!(value["cardIds"], serde_json::json!([9]));
        // Markers are display state and are not persisted.
        assert!(value.get("marker").is_none());

        let restored: SpawnPoint = serde_json::from_value(value).unwrap();
        assert_eq!(restored.cards.as_slice(), &[CardId::new(9)]);
        assert_eq!(restored.marker, None);
    }
}
