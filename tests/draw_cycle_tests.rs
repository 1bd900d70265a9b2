//! Draw-cycle integration tests.
//!
//! These cover the deck guarantees end to end: no repeats within a
//! shuffle cycle, reshuffles on exhaustion and on configuration
//! change, and the expansion filter.

use std::collections::HashSet;

use proptest::prelude::*;

use spawn_deck::{
    available_cards, Card, CardCatalog, CardId, DeckConfig, DeckRng, DrawEngine, Expansion, Level,
    ZombieType,
};

fn walker(id: u32, level: Level) -> Card {
    Card::new(CardId::new(id), level).with_count(ZombieType::Walker, 2)
}

fn wolf(id: u32, level: Level) -> Card {
    Card::new(CardId::new(id), level)
        .with_count(ZombieType::Wolfz, 3)
        .with_expansion(Expansion::Wolfz)
}

/// Six blue base cards, two blue Wolfz cards, three yellow base cards.
fn mixed_catalog() -> CardCatalog {
    let mut cards: Vec<Card> = (1..=6).map(|id| walker(id, Level::Blue)).collect();
    cards.extend((7..=8).map(|id| wolf(id, Level::Blue)));
    cards.extend((9..=11).map(|id| walker(id, Level::Yellow)));
    CardCatalog::from_cards(cards).unwrap()
}

fn blue_engine(wolfz_enabled: bool, seed: u64) -> DrawEngine {
    DrawEngine::with_rng(
        mixed_catalog(),
        DeckConfig::new(Level::Blue, wolfz_enabled),
        DeckRng::new(seed),
    )
}

#[test]
fn test_no_repeat_within_cycle() {
    let mut engine = blue_engine(true, 7);
    let eligible = engine.eligible_count();
    assert_eq!(eligible, 8);

    let mut seen = HashSet::new();
    for _ in 0..eligible {
        let drawn = engine.draw(1);
        assert_eq!(drawn.len(), 1);
        assert!(seen.insert(drawn[0].id), "repeated {}", drawn[0].id);
    }
    assert_eq!(seen.len(), eligible);
}

#[test]
fn test_reshuffle_on_exhaustion() {
    let mut engine = blue_engine(true, 7);
    for _ in 0..8 {
        engine.draw(1);
    }
    assert_eq!(engine.undrawn_count(), 0);

    // The ninth request succeeds: the full deck is available again.
    let drawn = engine.draw(1);
    assert_eq!(drawn.len(), 1);
    assert_eq!(engine.state().drawn_count(), 1);
}

#[test]
fn test_reshuffle_on_config_change() {
    let mut engine = blue_engine(false, 7);
    let first_cycle: HashSet<CardId> = (0..3).map(|_| engine.draw(1)[0].id).collect();
    assert_eq!(first_cycle.len(), 3);

    engine.set_config(DeckConfig::new(Level::Yellow, false));
    let yellow = engine.draw(1);
    assert_eq!(yellow[0].level, Level::Yellow);
    assert_eq!(engine.state().config().level, Level::Yellow);

    // Switching back starts a fresh blue cycle: previously drawn blue
    // IDs are no longer excluded.
    engine.set_config(DeckConfig::new(Level::Blue, false));
    let mut second_cycle = HashSet::new();
    for _ in 0..6 {
        second_cycle.insert(engine.draw(1)[0].id);
    }
    assert_eq!(second_cycle.len(), 6);
}

#[test]
fn test_wolfz_disabled_excludes_wolf_cards() {
    let catalog = mixed_catalog();
    let base_only = available_cards(&catalog, DeckConfig::new(Level::Blue, false));
    assert!(base_only.iter().all(|card| card.expansion != Expansion::Wolfz));
    assert_eq!(base_only.len(), 6);

    // Drawing a full cycle never produces a wolf card either.
    let mut engine = blue_engine(false, 13);
    for _ in 0..6 {
        let drawn = engine.draw(1);
        assert_ne!(drawn[0].expansion, Expansion::Wolfz);
    }
}

#[test]
fn test_wolfz_enabled_includes_both_sets() {
    let catalog = mixed_catalog();
    let cards = available_cards(&catalog, DeckConfig::new(Level::Blue, true));
    let expansions: HashSet<Expansion> = cards.iter().map(|card| card.expansion).collect();
    assert!(expansions.contains(&Expansion::Base));
    assert!(expansions.contains(&Expansion::Wolfz));
}

#[test]
fn test_over_asking_stops_early_without_reshuffle() {
    let mut engine = blue_engine(true, 7);
    let first = engine.draw(5);
    assert_eq!(first.len(), 5);

    // Three cards remain; asking for five returns three.
    let second = engine.draw(5);
    assert_eq!(second.len(), 3);

    let all: HashSet<CardId> = first.iter().chain(second.iter()).map(|card| card.id).collect();
    assert_eq!(all.len(), 8);
}

#[test]
fn test_empty_catalog_is_a_normal_state() {
    let mut engine = DrawEngine::with_rng(CardCatalog::new(), DeckConfig::default(), DeckRng::new(1));
    assert!(engine.draw(1).is_empty());
    assert!(engine.draw(5).is_empty());
    assert_eq!(engine.eligible_count(), 0);
}

#[test]
fn test_no_cards_at_level_is_a_normal_state() {
    let mut engine = DrawEngine::with_rng(
        mixed_catalog(),
        DeckConfig::new(Level::Red, true),
        DeckRng::new(1),
    );
    assert!(engine.draw(1).is_empty());
}

proptest! {
    /// Whatever the request sizes and seed, one shuffle cycle never
    /// repeats a card.
    #[test]
    fn prop_no_repeat_within_cycle(
        seed in 0u64..1_000,
        requests in prop::collection::vec(1usize..4, 1..8),
    ) {
        let mut engine = blue_engine(true, seed);
        let eligible = engine.eligible_count();

        let mut seen = HashSet::new();
        let mut total = 0;
        'requests: for request in requests {
            for card in engine.draw(request) {
                prop_assert!(seen.insert(card.id));
                total += 1;
                if total == eligible {
                    // The next request would start a new cycle.
                    break 'requests;
                }
            }
        }
    }
}
