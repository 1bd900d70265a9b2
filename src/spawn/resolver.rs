//! Double Spawn resolution.
//!
//! A Double Spawn card makes its spawn point spawn nothing while the
//! next point in visual order draws twice as many cards. Freshly drawn
//! cards can themselves carry Double Spawn, so resolution iterates to a
//! fixed point: scan in ascending order, resolve the first unprocessed
//! source, restart the scan. A processed source is never revisited in
//! the same run (it can still receive cards as a later target), and an
//! iteration budget of three passes per spawn point bounds the run.

use rustc_hash::FxHashSet;

use crate::deck::DrawEngine;

use super::point::{CascadeMarker, SpawnPoint, SpawnPointId};

/// One resolved cascade: `source` doubled into `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cascade {
    pub source: SpawnPointId,
    pub target: SpawnPointId,
    /// Cards actually drawn for the target: 2k for k Double Spawn
    /// cards on the source, fewer when eligibility runs short.
    pub cards_drawn: usize,
}

/// Outcome of a resolution run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CascadeReport {
    /// Cascades in resolution order.
    pub cascades: Vec<Cascade>,
    /// True when the iteration budget ran out before the scan settled.
    /// The spawn points are left in their partially resolved state.
    pub budget_exhausted: bool,
}

impl CascadeReport {
    /// Whether any cascade fired.
    #[must_use]
    pub fn any(&self) -> bool {
        !self.cascades.is_empty()
    }
}

/// Number of Double Spawn cards assigned to a point.
///
/// IDs missing from the catalog count as zero.
fn double_spawn_count(engine: &DrawEngine, point: &SpawnPoint) -> usize {
    point
        .cards
        .iter()
        .filter(|id| {
            engine
                .catalog()
                .get(**id)
                .is_some_and(|card| card.is_double_spawn())
        })
        .count()
}

/// Resolve Double Spawn cascades across `points` in their current
/// order.
///
/// Markers from a previous run are cleared first. Each pass finds the
/// first spawn point holding `k >= 1` Double Spawn cards that has not
/// yet acted as a source: that point is marked [`CascadeMarker::Source`]
/// and the next point in order (wrapping past the end) has its
/// assignment replaced with `2k` freshly drawn cards and is marked
/// [`CascadeMarker::Target`]. A target becomes a candidate source on
/// the next pass when its fresh cards double again, which lets cascades
/// chain across points and around the wrap.
///
/// With fewer than two spawn points a cascade has no distinct target;
/// the source is marked and the cascade is skipped.
pub fn resolve_double_spawn(engine: &mut DrawEngine, points: &mut [SpawnPoint]) -> CascadeReport {
    let mut report = CascadeReport::default();
    for point in points.iter_mut() {
        point.marker = None;
    }
    if points.is_empty() {
        return report;
    }

    let budget = points.len() * 3;
    let mut processed: FxHashSet<SpawnPointId> = FxHashSet::default();

    for _ in 0..budget {
        let source_index = points
            .iter()
            .position(|point| !processed.contains(&point.id) && double_spawn_count(engine, point) > 0);
        let Some(source_index) = source_index else {
            // Scan settled: no unprocessed source remains.
            return report;
        };

        let doubles = double_spawn_count(engine, &points[source_index]);
        let source_id = points[source_index].id;
        processed.insert(source_id);
        points[source_index].marker = Some(CascadeMarker::Source);

        let target_index = (source_index + 1) % points.len();
        if target_index == source_index {
            log::debug!("{source_id} doubled with no distinct target, skipping cascade");
            continue;
        }

        let cards = engine.draw(2 * doubles);
        points[target_index].assign(&cards);
        points[target_index].marker = Some(CascadeMarker::Target);
        report.cascades.push(Cascade {
            source: source_id,
            target: points[target_index].id,
            cards_drawn: cards.len(),
        });
    }

    if points
        .iter()
        .any(|point| !processed.contains(&point.id) && double_spawn_count(engine, point) > 0)
    {
        log::warn!(
            "double spawn resolution stopped after {budget} passes with unresolved sources, check the card data"
        );
        report.budget_exhausted = true;
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardCatalog, CardId, Level, ZombieType};
    use crate::deck::{DeckConfig, DeckRng, DeckState};

    fn plain(id: u32) -> Card {
        Card::new(CardId::new(id), Level::Blue).with_count(ZombieType::Walker, 1)
    }

    fn double(id: u32) -> Card {
        Card::new(CardId::new(id), Level::Blue).with_double_spawn("Double Spawn")
    }

    fn point(n: u32, card: u32) -> SpawnPoint {
        let mut point = SpawnPoint::new(SpawnPointId::new(n), format!("Spawn Point {n}"));
        point.cards.push(CardId::new(card));
        point
    }

    /// Engine whose initial assignments already count as drawn, the
    /// way a prior draw pass leaves the deck.
    fn engine_with_drawn(cards: Vec<Card>, drawn: &[u32]) -> DrawEngine {
        let config = DeckConfig::new(Level::Blue, true);
        let mut engine =
            DrawEngine::with_rng(CardCatalog::from_cards(cards).unwrap(), config, DeckRng::new(3));
        let mut state = DeckState::new(config);
        for id in drawn {
            state.mark_drawn(CardId::new(*id));
        }
        engine.restore_state(state);
        engine
    }

    #[test]
    fn test_source_doubles_into_next_point() {
        // A holds the only Double Spawn card; the draw pool is plain.
        let mut cards = vec![double(1), plain(2), plain(3)];
        cards.extend((10..=20).map(plain));
        let mut engine = engine_with_drawn(cards, &[1, 2, 3]);

        let mut points = vec![point(1, 1), point(2, 2), point(3, 3)];
        let report = resolve_double_spawn(&mut engine, &mut points);

        assert_eq!(report.cascades.len(), 1);
        assert_eq!(report.cascades[0].source, SpawnPointId::new(1));
        assert_eq!(report.cascades[0].target, SpawnPointId::new(2));
        assert_eq!(report.cascades[0].cards_drawn, 2);

        assert_eq!(points[0].marker, Some(CascadeMarker::Source));
        assert_eq!(points[1].marker, Some(CascadeMarker::Target));
        assert_eq!(points[1].cards.len(), 2);
        // C keeps its original card.
        assert_eq!(points[2].marker, None);
        assert_eq!(points[2].cards.as_slice(), &[CardId::new(3)]);
        assert!(!report.budget_exhausted);
    }

    #[test]
    fn test_last_point_wraps_to_first() {
        let mut cards = vec![plain(1), plain(2), double(3)];
        cards.extend((10..=20).map(plain));
        let mut engine = engine_with_drawn(cards, &[1, 2, 3]);

        let mut points = vec![point(1, 1), point(2, 2), point(3, 3)];
        let report = resolve_double_spawn(&mut engine, &mut points);

        assert_eq!(report.cascades.len(), 1);
        assert_eq!(report.cascades[0].source, SpawnPointId::new(3));
        assert_eq!(report.cascades[0].target, SpawnPointId::new(1));
        assert_eq!(points[0].cards.len(), 2);
        assert_eq!(points[0].marker, Some(CascadeMarker::Target));
    }

    #[test]
    fn test_two_double_spawn_cards_draw_four() {
        let mut cards = vec![double(1), double(2), plain(3)];
        cards.extend((10..=20).map(plain));
        let mut engine = engine_with_drawn(cards, &[1, 2, 3]);

        let mut a = SpawnPoint::new(SpawnPointId::new(1), "A");
        a.cards.push(CardId::new(1));
        a.cards.push(CardId::new(2));
        let mut points = vec![a, point(2, 3)];

        let report = resolve_double_spawn(&mut engine, &mut points);
        assert_eq!(report.cascades.len(), 1);
        assert_eq!(report.cascades[0].cards_drawn, 4);
        assert_eq!(points[1].cards.len(), 4);
    }

    #[test]
    fn test_all_doubles_chain_terminates() {
        // Every card in the pool doubles; the chain must still settle
        // because a processed source never fires twice.
        let cards: Vec<Card> = (1..=20).map(double).collect();
        let mut engine = engine_with_drawn(cards, &[1, 2, 3]);

        let mut points = vec![point(1, 1), point(2, 2), point(3, 3)];
        let report = resolve_double_spawn(&mut engine, &mut points);

        // A doubles into B (2 cards), B into C (4), C wraps into A (8).
        let drawn: Vec<usize> = report.cascades.iter().map(|cascade| cascade.cards_drawn).collect();
        assert_eq!(drawn, vec![2, 4, 8]);
        assert!(!report.budget_exhausted);

        assert_eq!(points[0].marker, Some(CascadeMarker::Target));
        assert_eq!(points[1].marker, Some(CascadeMarker::Source));
        assert_eq!(points[2].marker, Some(CascadeMarker::Source));
    }

    #[test]
    fn test_single_point_self_wrap_is_noop() {
        let cards = vec![double(1), plain(2), plain(3)];
        let mut engine = engine_with_drawn(cards, &[1]);

        let mut points = vec![point(1, 1)];
        let report = resolve_double_spawn(&mut engine, &mut points);

        assert!(report.cascades.is_empty());
        assert!(!report.budget_exhausted);
        assert_eq!(points[0].marker, Some(CascadeMarker::Source));
        assert_eq!(points[0].cards.as_slice(), &[CardId::new(1)]);
    }

    #[test]
    fn test_no_doubles_is_noop() {
        let cards = vec![plain(1), plain(2)];
        let mut engine = engine_with_drawn(cards, &[1, 2]);

        let mut points = vec![point(1, 1), point(2, 2)];
        let report = resolve_double_spawn(&mut engine, &mut points);

        assert!(report.cascades.is_empty());
        assert!(points.iter().all(|point| point.marker.is_none()));
    }

    #[test]
    fn test_markers_cleared_on_each_run() {
        let mut cards = vec![double(1), plain(2), plain(3)];
        cards.extend((10..=20).map(plain));
        let mut engine = engine_with_drawn(cards, &[1, 2, 3]);

        let mut points = vec![point(1, 1), point(2, 2), point(3, 3)];
        resolve_double_spawn(&mut engine, &mut points);
        assert_eq!(points[0].marker, Some(CascadeMarker::Source));

        // Replace every assignment with plain cards and re-run.
        let plain_card = engine.catalog().get(CardId::new(10)).unwrap().clone();
        for point in points.iter_mut() {
            point.assign(std::slice::from_ref(&plain_card));
        }
        let report = resolve_double_spawn(&mut engine, &mut points);

        assert!(report.cascades.is_empty());
        assert!(points.iter().all(|point| point.marker.is_none()));
    }

    #[test]
    fn test_unknown_assigned_ids_do_not_trigger() {
        let cards = vec![plain(1)];
        let mut engine = engine_with_drawn(cards, &[]);

        let mut points = vec![point(1, 77), point(2, 1)];
        let report = resolve_double_spawn(&mut engine, &mut points);
        assert!(report.cascades.is_empty());
    }

    #[test]
    fn test_empty_points_is_noop() {
        let mut engine = engine_with_drawn(vec![plain(1)], &[]);
        let mut points: Vec<SpawnPoint> = Vec::new();
        let report = resolve_double_spawn(&mut engine, &mut points);
        assert!(report.cascades.is_empty());
        assert!(!report.budget_exhausted);
    }
}
