//! Spawn card data - static card definitions.
//!
//! A `Card` holds the immutable properties of one spawn card: its
//! difficulty level, how many of each mob it spawns, and any special
//! markers (Double Spawn, Extra Activation). Cards are loaded once into
//! a `CardCatalog` and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::zombies::ZombieType;

/// Unique identifier for a spawn card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {}", self.0)
    }
}

/// Difficulty tier gating which cards are eligible for drawing.
///
/// Serialized as its numeric ID (1 = Blue .. 4 = Red) to match the
/// persisted session and deck-state records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    Blue = 1,
    Yellow = 2,
    Orange = 3,
    Red = 4,
}

impl Level {
    /// Every level, in ascending difficulty.
    pub const ALL: [Level; 4] = [Level::Blue, Level::Yellow, Level::Orange, Level::Red];

    /// Look up a level by its numeric ID.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Level::Blue),
            2 => Some(Level::Yellow),
            3 => Some(Level::Orange),
            4 => Some(Level::Red),
            _ => None,
        }
    }

    /// Numeric ID (1-4).
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Display label. Derived from the level, never stored.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Level::Blue => "Blue",
            Level::Yellow => "Yellow",
            Level::Orange => "Orange",
            Level::Red => "Red",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Level::from_id(id).ok_or_else(|| format!("invalid level id {id}, expected 1-4"))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.id()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Content-set tag used for inclusion filtering.
///
/// Never read from the catalog document. Derived at load time from
/// which mob counts a card populates (see the loader).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expansion {
    /// Base game content.
    Base,
    /// Wolfz expansion content, eligible only when the toggle is on.
    Wolfz,
    /// Guest content from other sets, never eligible for drawing.
    Other,
}

/// A single spawn card.
///
/// Counts are per-mob-type; a card with `nothing > 0` spawns no mobs at
/// all. `double_spawn` carries the card's marker text when present and
/// drives the cascade in the resolver. `special_necromancer` and
/// `special_abomination` are informational only and never displayed.
///
/// ## Example
///
/// ```
/// use spawn_deck::cards::{Card, CardId, Level, ZombieType};
///
/// let card = Card::new(CardId::new(7), Level::Yellow)
///     .with_count(ZombieType::Walker, 4)
///     .with_count(ZombieType::Fatty, 1);
///
/// assert_eq!(card.total_zombies(), 5);
/// assert!(!card.is_double_spawn());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub level: Level,
    pub nothing: u32,
    pub walker: u32,
    pub fatty: u32,
    pub runner: u32,
    pub abomination: u32,
    pub wolfz: u32,
    pub wolfbomination: u32,
    pub npc: u32,
    pub deadeye_walkers: u32,
    pub murder_of_crowz: u32,
    pub necromancer: u32,
    pub double_spawn: Option<String>,
    pub extra_activation: Option<String>,
    pub special_necromancer: Option<String>,
    pub special_abomination: Option<String>,
    pub expansion: Expansion,
}

impl Card {
    /// Bare card: zero counts, no markers, base expansion.
    #[must_use]
    pub fn new(id: CardId, level: Level) -> Self {
        Self {
            id,
            level,
            nothing: 0,
            walker: 0,
            fatty: 0,
            runner: 0,
            abomination: 0,
            wolfz: 0,
            wolfbomination: 0,
            npc: 0,
            deadeye_walkers: 0,
            murder_of_crowz: 0,
            necromancer: 0,
            double_spawn: None,
            extra_activation: None,
            special_necromancer: None,
            special_abomination: None,
            expansion: Expansion::Base,
        }
    }

    /// Set a mob count (builder pattern).
    #[must_use]
    pub fn with_count(mut self, zombie: ZombieType, count: u32) -> Self {
        *zombie.count_mut(&mut self) = count;
        self
    }

    /// Mark as a Double Spawn card (builder pattern).
    #[must_use]
    pub fn with_double_spawn(mut self, marker: impl Into<String>) -> Self {
        self.double_spawn = Some(marker.into());
        self
    }

    /// Mark with an Extra Activation (builder pattern).
    #[must_use]
    pub fn with_extra_activation(mut self, zombie_type: impl Into<String>) -> Self {
        self.extra_activation = Some(zombie_type.into());
        self
    }

    /// Override the expansion tag (builder pattern).
    #[must_use]
    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }

    /// Whether drawing this card triggers a Double Spawn cascade.
    #[must_use]
    pub fn is_double_spawn(&self) -> bool {
        self.double_spawn.is_some()
    }

    /// Whether the card spawns no mobs at all.
    #[must_use]
    pub fn spawns_nothing(&self) -> bool {
        self.nothing > 0
    }

    /// Whether any special marker is set.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.double_spawn.is_some()
            || self.extra_activation.is_some()
            || self.special_necromancer.is_some()
            || self.special_abomination.is_some()
    }

    /// Total mob count across every type.
    #[must_use]
    pub fn total_zombies(&self) -> u32 {
        ZombieType::ALL.iter().map(|zombie| zombie.count_in(self)).sum()
    }
}
