//! Display model for a drawn card.
//!
//! `CardView` is the pure data a UI renders for one card: the level
//! label, non-zero mob lines in table order, and any player-facing
//! markers. Building a view reads the card and nothing else, so
//! re-displaying the same card always produces the same view.

use super::card::{Card, CardId, Level};
use super::zombies::ZombieType;

/// One mob line on a card: type and count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MobLine {
    pub zombie: ZombieType,
    pub count: u32,
}

/// Renderable summary of a card.
///
/// `special_necromancer` and `special_abomination` are intentionally
/// absent: they categorize cards internally and are never shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    pub level: Level,
    pub level_name: &'static str,
    /// Non-zero mob counts, in `ZombieType::ALL` order. Empty for
    /// "nothing spawns" cards.
    pub mobs: Vec<MobLine>,
    pub nothing: bool,
    pub double_spawn: bool,
    pub extra_activation: Option<String>,
}

impl CardView {
    /// Build the view for a card.
    #[must_use]
    pub fn new(card: &Card) -> Self {
        let nothing = card.spawns_nothing();
        let mobs = if nothing {
            Vec::new()
        } else {
            ZombieType::ALL
                .iter()
                .filter_map(|&zombie| {
                    let count = zombie.count_in(card);
                    (count > 0).then_some(MobLine { zombie, count })
                })
                .collect()
        };

        Self {
            id: card.id,
            level: card.level,
            level_name: card.level.name(),
            mobs,
            nothing,
            double_spawn: card.is_double_spawn(),
            extra_activation: card.extra_activation.clone(),
        }
    }
}
