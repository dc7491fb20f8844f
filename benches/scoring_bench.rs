use criterion::{criterion_group, criterion_main, Criterion};
use match_momentum::config::AnalysisParams;
use match_momentum::events::{Event, Half, Outcome, PossessionPhase, PressingZone, ResultCode};
use match_momentum::scorer::Scorer;
use match_momentum::timeline;
use std::hint::black_box;
use std::time::Duration;

// Roughly one season of tagged events for a single team.
fn synthetic_events(n: usize) -> Vec<Event> {
    let phases = [
        PossessionPhase::OwnAttack,
        PossessionPhase::TransitionToAttack,
        PossessionPhase::OpponentAttack,
        PossessionPhase::TransitionToDefense,
    ];
    let results = [
        None,
        Some(ResultCode::KeepPossession),
        Some(ResultCode::ShotOnTarget),
        None,
        Some(ResultCode::PenaltyBoxEntry),
        None,
        Some(ResultCode::Goal),
    ];
    let zones = [None, Some(PressingZone::High), Some(PressingZone::Mid), None];

    (0..n)
        .map(|i| {
            let half = if i % 2 == 0 { Half::First } else { Half::Second };
            let mut e = Event::new(
                half,
                Duration::from_millis((i as u64 * 7_919) % 2_700_000),
                phases[i % phases.len()],
            );
            e.duration = Duration::from_millis(1_500);
            e.outcome = Some(if i % 3 == 0 {
                Outcome::Negative
            } else {
                Outcome::Positive
            });
            e.result_primary = results[i % results.len()];
            e.pressing_zone = zones[i % zones.len()];
            e
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::default();
    let params = AnalysisParams::default();
    let events = synthetic_events(50_000);

    c.bench_function("score_all (50k events)", |b| {
        b.iter(|| scorer.score_all(black_box(&events)))
    });

    let scored = scorer.score_all(&events);
    c.bench_function("aggregate (50k events)", |b| {
        b.iter(|| timeline::aggregate(black_box(&scored), black_box(&params)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
