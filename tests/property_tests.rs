use match_momentum::config::AnalysisParams;
use match_momentum::events::{
    Event, Half, Outcome, PossessionPhase, PressingZone, ResultCode,
};
use match_momentum::scorer::Scorer;
use match_momentum::timeline::{aggregate, build_intervals};
use proptest::prelude::*;
use proptest::sample::select;
use std::time::Duration;

// --- STRATEGIES ---

fn arb_result() -> impl Strategy<Value = Option<ResultCode>> {
    proptest::option::of(select(vec![
        ResultCode::Goal,
        ResultCode::ShotOnTarget,
        ResultCode::ShotOffTarget,
        ResultCode::ShotBlocked,
        ResultCode::PenaltyBoxEntry,
        ResultCode::WinPenalty,
        ResultCode::WinSetPiece,
        ResultCode::KeepPossession,
        ResultCode::Unrecognized,
    ]))
}

prop_compose! {
    fn arb_event()(
        first in any::<bool>(),
        offset_ms in 0u64..3_300_000,
        duration_ms in 0u64..30_000,
        phase in select(vec![
            PossessionPhase::OwnAttack,
            PossessionPhase::TransitionToAttack,
            PossessionPhase::OpponentAttack,
            PossessionPhase::TransitionToDefense,
            PossessionPhase::Unclassified,
        ]),
        outcome in proptest::option::of(select(vec![Outcome::Positive, Outcome::Negative])),
        r1 in arb_result(),
        r2 in arb_result(),
        r3 in arb_result(),
        zone in proptest::option::of(select(vec![
            PressingZone::High,
            PressingZone::Mid,
            PressingZone::Low,
            PressingZone::None,
        ])),
    ) -> Event {
        Event {
            start_offset: Duration::from_millis(offset_ms),
            duration: Duration::from_millis(duration_ms),
            half: if first { Half::First } else { Half::Second },
            possession_phase: phase,
            outcome,
            result_primary: r1,
            result_secondary: r2,
            result_tertiary: r3,
            pressing_zone: zone,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_score_is_bounded_and_deterministic(e in arb_event()) {
        let scorer = Scorer::default();
        let a = scorer.score(&e);
        let b = scorer.score(&e);
        prop_assert_eq!(a, b);
        prop_assert!(a.is_finite());
        // Goal (20) plus the largest single bonus (3) bounds every score.
        prop_assert!(a.abs() <= 23.0, "score out of range: {}", a);
        prop_assert_eq!(scorer.score_details(&e).total, a);
    }

    #[test]
    fn test_buckets_sorted_and_cumulative_consistent(
        events in proptest::collection::vec(arb_event(), 0..200)
    ) {
        let scorer = Scorer::default();
        let scored = scorer.score_all(&events);
        let (buckets, stats) = aggregate(&scored, &AnalysisParams::default());

        let mut running = 0.0f32;
        for w in buckets.windows(2) {
            prop_assert!(w[0].interval_index < w[1].interval_index);
        }
        for b in &buckets {
            running += b.interval_momentum_sum;
            prop_assert!((b.cumulative_momentum - running).abs() < 1e-3);
        }

        let counted: usize = buckets.iter().map(|b| b.event_count).sum();
        prop_assert_eq!(counted, events.len());

        let total: f32 = scored.iter().map(|s| s.momentum_score).sum();
        prop_assert!((running - total).abs() < 1e-2);

        let pct = stats.own.possession_pct + stats.opponent.possession_pct;
        prop_assert!(pct == 0.0 || (pct - 100.0).abs() < 0.15);
    }

    #[test]
    fn test_gap_fill_keeps_final_cumulative(
        events in proptest::collection::vec(arb_event(), 1..100)
    ) {
        let scored = Scorer::default().score_all(&events);
        let sparse = build_intervals(&scored, &AnalysisParams::default());
        let dense = build_intervals(&scored, &AnalysisParams {
            fill_empty_intervals: true,
            ..Default::default()
        });

        let last_sparse = sparse.last().unwrap();
        let last_dense = dense.last().unwrap();
        prop_assert_eq!(last_sparse.interval_index, last_dense.interval_index);
        prop_assert_eq!(dense.len() as u32, last_dense.interval_index + 1);
        prop_assert!((last_sparse.cumulative_momentum - last_dense.cumulative_momentum).abs() < 1e-3);
    }
}
