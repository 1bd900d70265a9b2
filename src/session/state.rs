//! Session state - the player-visible table setup.
//!
//! A `Session` is what the companion persists between visits: the hero
//! level, the Wolfz toggle, the ordered spawn points, and the counter
//! that names new points.

use serde::{Deserialize, Serialize};

use crate::cards::Level;
use crate::deck::DeckConfig;
use crate::spawn::{SpawnPoint, SpawnPointId};

/// Player-visible session state.
///
/// The spawn-point order here is the visual order and therefore the
/// cascade order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub hero_level: Level,
    pub wolfz_enabled: bool,
    pub spawn_points: Vec<SpawnPoint>,
    /// Highest spawn-point number handed out. Never reused after a
    /// removal, so titles stay unambiguous.
    pub spawn_point_counter: u32,
}

impl Default for Session {
    /// Three untouched spawn points at level Blue with Wolfz enabled,
    /// the companion's first-visit setup.
    fn default() -> Self {
        let spawn_points = (1..=3)
            .map(|n| SpawnPoint::new(SpawnPointId::new(n), format!("Spawn Point {n}")))
            .collect();
        Self {
            hero_level: Level::Blue,
            wolfz_enabled: true,
            spawn_points,
            spawn_point_counter: 3,
        }
    }
}

impl Session {
    /// Deck configuration implied by the current settings.
    #[must_use]
    pub fn config(&self) -> DeckConfig {
        DeckConfig::new(self.hero_level, self.wolfz_enabled)
    }

    /// Add a spawn point at the end of the order.
    ///
    /// `title` defaults to `Spawn Point {n}`. Returns the new point's
    /// ID.
    pub fn add_spawn_point(&mut self, title: Option<String>) -> SpawnPointId {
        self.spawn_point_counter += 1;
        let id = SpawnPointId::new(self.spawn_point_counter);
        let title =
            title.unwrap_or_else(|| format!("Spawn Point {}", self.spawn_point_counter));
        self.spawn_points.push(SpawnPoint::new(id, title));
        id
    }

    /// Remove a spawn point. Returns false when the ID is unknown.
    pub fn remove_spawn_point(&mut self, id: SpawnPointId) -> bool {
        let before = self.spawn_points.len();
        self.spawn_points.retain(|point| point.id != id);
        self.spawn_points.len() != before
    }

    /// Move the point at visual index `from` to index `to`.
    ///
    /// Out-of-range indices are ignored.
    pub fn move_spawn_point(&mut self, from: usize, to: usize) {
        if from >= self.spawn_points.len() || to >= self.spawn_points.len() || from == to {
            return;
        }
        let point = self.spawn_points.remove(from);
        self.spawn_points.insert(to, point);
    }

    /// Rename a spawn point.
    ///
    /// Empty titles are ignored; the editor keeps the previous title
    /// on empty input.
    pub fn rename_spawn_point(&mut self, id: SpawnPointId, title: impl Into<String>) {
        let title = title.into();
        if title.trim().is_empty() {
            return;
        }
        if let Some(point) = self.spawn_point_mut(id) {
            point.title = title;
        }
    }

    /// Look up a spawn point by ID.
    #[must_use]
    pub fn spawn_point(&self, id: SpawnPointId) -> Option<&SpawnPoint> {
        self.spawn_points.iter().find(|point| point.id == id)
    }

    /// Look up a spawn point by ID, mutably.
    pub fn spawn_point_mut(&mut self, id: SpawnPointId) -> Option<&mut SpawnPoint> {
        self.spawn_points.iter_mut().find(|point| point.id == id)
    }
}
