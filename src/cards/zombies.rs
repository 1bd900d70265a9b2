//! Mob type table.
//!
//! The mapping from mob type to card field lives in one place: each
//! `ZombieType` knows its display label and how to read (or write) its
//! count on a card. Display code iterates `ZombieType::ALL` instead of
//! dispatching on type names at every call site.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// One of the mob types a spawn card can put on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieType {
    Walker,
    Fatty,
    Runner,
    Abomination,
    Wolfz,
    Wolfbomination,
    Npc,
    DeadeyeWalkers,
    MurderOfCrowz,
    Necromancer,
}

impl ZombieType {
    /// Every mob type, in display order.
    pub const ALL: [ZombieType; 10] = [
        ZombieType::Walker,
        ZombieType::Fatty,
        ZombieType::Runner,
        ZombieType::Abomination,
        ZombieType::Wolfz,
        ZombieType::Wolfbomination,
        ZombieType::Npc,
        ZombieType::DeadeyeWalkers,
        ZombieType::MurderOfCrowz,
        ZombieType::Necromancer,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ZombieType::Walker => "Walker",
            ZombieType::Fatty => "Fatty",
            ZombieType::Runner => "Runner",
            ZombieType::Abomination => "Abomination",
            ZombieType::Wolfz => "Wolfz",
            ZombieType::Wolfbomination => "Wolfbomination",
            ZombieType::Npc => "NPC",
            ZombieType::DeadeyeWalkers => "Deadeye Walkers",
            ZombieType::MurderOfCrowz => "Murder of Crowz",
            ZombieType::Necromancer => "Necromancer",
        }
    }

    /// Read this type's count from a card.
    #[must_use]
    pub const fn count_in(self, card: &Card) -> u32 {
        match self {
            ZombieType::Walker => card.walker,
            ZombieType::Fatty => card.fatty,
            ZombieType::Runner => card.runner,
            ZombieType::Abomination => card.abomination,
            ZombieType::Wolfz => card.wolfz,
            ZombieType::Wolfbomination => card.wolfbomination,
            ZombieType::Npc => card.npc,
            ZombieType::DeadeyeWalkers => card.deadeye_walkers,
            ZombieType::MurderOfCrowz => card.murder_of_crowz,
            ZombieType::Necromancer => card.necromancer,
        }
    }

    /// Mutable access to this type's count on a card.
    pub fn count_mut(self, card: &mut Card) -> &mut u32 {
        match self {
            ZombieType::Walker => &mut card.walker,
            ZombieType::Fatty => &mut card.fatty,
            ZombieType::Runner => &mut card.runner,
            ZombieType::Abomination => &mut card.abomination,
            ZombieType::Wolfz => &mut card.wolfz,
            ZombieType::Wolfbomination => &mut card.wolfbomination,
            ZombieType::Npc => &mut card.npc,
            ZombieType::DeadeyeWalkers => &mut card.deadeye_walkers,
            ZombieType::MurderOfCrowz => &mut card.murder_of_crowz,
            ZombieType::Necromancer => &mut card.necromancer,
        }
    }
}

impl std::fmt::Display for ZombieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Level};

    #[test]
    fn test_accessors_cover_every_field() {
        let mut card = Card::new(CardId::new(1), Level::Blue);
        for (n, zombie) in ZombieType::ALL.iter().enumerate() {
            *zombie.count_mut(&mut card) = n as u32 + 1;
        }
        for (n, zombie) in ZombieType::ALL.iter().enumerate() {
            assert_eq!(zombie.count_in(&card), n as u32 + 1, "{zombie}");
        }
        // 1 + 2 + ... + 10
        assert_eq!(card.total_zombies(), 55);
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<_> = ZombieType::ALL.iter().map(|z| z.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ZombieType::ALL.len());
    }
}
