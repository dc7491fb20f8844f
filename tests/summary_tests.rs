mod common;

use common::EventBuilder;
use match_momentum::events::{Half, Outcome, PossessionPhase, PressingZone, ResultCode, Side};
use match_momentum::pressing::{self, pressing_side};
use match_momentum::transitions;

use PossessionPhase::{OpponentAttack, OwnAttack, TransitionToAttack, TransitionToDefense};

// --- PRESSING ---

#[test]
fn test_pressing_team_is_out_of_possession() {
    assert_eq!(pressing_side(OpponentAttack), Side::Own);
    assert_eq!(pressing_side(OwnAttack), Side::Opponent);
    assert_eq!(pressing_side(TransitionToAttack), Side::Neutral);
    assert_eq!(pressing_side(TransitionToDefense), Side::Neutral);
}

#[test]
fn test_pressing_rates_by_zone_and_team() {
    let press = |phase, zone, outcome| {
        EventBuilder::new(phase)
            .press(zone)
            .outcome(outcome)
            .build()
    };
    let events = vec![
        press(OpponentAttack, PressingZone::High, Outcome::Positive),
        press(OpponentAttack, PressingZone::High, Outcome::Negative),
        press(OpponentAttack, PressingZone::High, Outcome::Positive),
        press(OwnAttack, PressingZone::Low, Outcome::Negative),
        // Not a press.
        press(OwnAttack, PressingZone::None, Outcome::Positive),
        EventBuilder::new(OwnAttack).build(),
    ];
    let s = pressing::summarize(&events);

    assert_eq!(s.total, 4);
    assert_eq!(s.successful, 2);
    assert_eq!(s.success_rate, 50.0);

    let high = s
        .by_zone
        .iter()
        .find(|(z, _)| *z == PressingZone::High)
        .map(|(_, c)| *c)
        .unwrap();
    assert_eq!(high.total, 3);
    assert_eq!(high.successful, 2);
    assert_eq!(high.success_rate, 66.7);

    let own = s
        .by_team
        .iter()
        .find(|(t, _)| *t == Side::Own)
        .map(|(_, c)| *c)
        .unwrap();
    assert_eq!(own.total, 3);

    let opp_low = s
        .by_team_zone
        .iter()
        .find(|(k, _)| *k == (Side::Opponent, PressingZone::Low))
        .map(|(_, c)| *c)
        .unwrap();
    assert_eq!(opp_low.total, 1);
    assert_eq!(opp_low.success_rate, 0.0);

    assert_eq!(s.by_half.len(), 1);
    assert_eq!(s.by_half[0].0, Half::First);
}

#[test]
fn test_no_presses_is_zero_rate() {
    let s = pressing::summarize(&[EventBuilder::new(OwnAttack).build()]);
    assert_eq!(s.total, 0);
    assert_eq!(s.success_rate, 0.0);
    assert!(s.by_zone.is_empty());
}

#[test]
fn test_ppda_counts_kept_possession_over_defensive_actions() {
    let press = |outcome, result: Option<ResultCode>| {
        let mut b = EventBuilder::new(OpponentAttack)
            .press(PressingZone::Mid)
            .outcome(outcome);
        if let Some(r) = result {
            b = b.result(r);
        }
        b.build()
    };
    let events = vec![
        press(Outcome::Negative, Some(ResultCode::KeepPossession)),
        press(Outcome::Negative, Some(ResultCode::KeepPossession)),
        // Kept possession is never a defensive action, even when successful.
        press(Outcome::Positive, Some(ResultCode::KeepPossession)),
        press(Outcome::Positive, None),
        press(Outcome::Positive, Some(ResultCode::ShotBlocked)),
        press(Outcome::Positive, None),
        // Failed press without a kept ball counts for neither side of the ratio.
        press(Outcome::Negative, None),
    ];
    let s = pressing::summarize(&events);
    assert_eq!(s.ppda, Some(1.0));

    let mut more = events.clone();
    more.push(press(Outcome::Positive, None));
    assert_eq!(pressing::summarize(&more).ppda, Some(0.75));
}

#[test]
fn test_ppda_is_none_when_either_count_is_zero() {
    let only_kept = vec![EventBuilder::new(OpponentAttack)
        .press(PressingZone::High)
        .outcome(Outcome::Positive)
        .result(ResultCode::KeepPossession)
        .build()];
    assert_eq!(pressing::summarize(&only_kept).ppda, None);

    let no_kept = vec![EventBuilder::new(OpponentAttack)
        .press(PressingZone::High)
        .outcome(Outcome::Positive)
        .build()];
    assert_eq!(pressing::summarize(&no_kept).ppda, None);

    assert_eq!(pressing::summarize(&[]).ppda, None);
}

#[test]
fn test_ppda_rounds_to_two_decimals() {
    let kept = EventBuilder::new(OpponentAttack)
        .press(PressingZone::Low)
        .result(ResultCode::KeepPossession)
        .build();
    let won = EventBuilder::new(OpponentAttack)
        .press(PressingZone::Low)
        .outcome(Outcome::Positive)
        .build();
    let events = vec![kept.clone(), kept, won.clone(), won.clone(), won];
    assert_eq!(pressing::summarize(&events).ppda, Some(0.67));
}

// --- TRANSITIONS ---

#[test]
fn test_transition_summary() {
    let events = vec![
        EventBuilder::new(TransitionToAttack)
            .result(ResultCode::ShotOnTarget)
            .lasting(4)
            .build(),
        EventBuilder::new(TransitionToAttack)
            .result(ResultCode::PenaltyBoxEntry)
            .lasting(6)
            .build(),
        EventBuilder::new(TransitionToAttack).lasting(2).build(),
        EventBuilder::new(TransitionToDefense)
            .at(Half::Second, 100)
            .lasting(8)
            .build(),
        // Ignored: not a transition.
        EventBuilder::new(OwnAttack).result(ResultCode::Goal).build(),
    ];
    let s = transitions::summarize(&events);

    assert_eq!(s.total, 4);
    assert_eq!(s.own_gained, 3);
    assert_eq!(s.own_lost, 1);
    assert_eq!(s.to_shots, 1);
    assert_eq!(s.to_entries, 1);
    assert_eq!(s.shot_rate, 25.0);
    assert_eq!(s.first_half, 3);
    assert_eq!(s.second_half, 1);
    assert_eq!(s.avg_duration_secs, 5.0);

    assert_eq!(s.gained.total, 3);
    assert_eq!(s.gained.shot_rate, 33.3);
    assert_eq!(s.gained.entry_rate, 33.3);
    assert_eq!(s.lost.total, 1);
    assert_eq!(s.lost.shot_rate, 0.0);
}

#[test]
fn test_no_transitions() {
    let s = transitions::summarize(&[]);
    assert_eq!(s.total, 0);
    assert_eq!(s.avg_duration_secs, 0.0);
    assert_eq!(s.shot_rate, 0.0);
}
