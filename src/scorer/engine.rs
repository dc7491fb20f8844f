use super::{ScoreDetails, Scorer};
use crate::config::ScoringWeights;
use crate::events::{Event, Outcome, PossessionPhase, PressingZone, ResultCode};

/// Step 1: the first result slot holding a scored category sets the base.
/// Shot results count in any slot; entries and set-piece wins only in primary.
pub fn result_tier(w: &ScoringWeights, event: &Event) -> f32 {
    event
        .result_slots()
        .into_iter()
        .enumerate()
        .find_map(|(slot, code)| code.and_then(|c| result_points(w, c, slot == 0)))
        .map_or(0.0, |magnitude| magnitude * event.side().sign())
}

fn result_points(w: &ScoringWeights, code: ResultCode, is_primary: bool) -> Option<f32> {
    match code {
        ResultCode::Goal => Some(w.points_goal),
        ResultCode::ShotOnTarget => Some(w.points_shot_on_target),
        ResultCode::ShotOffTarget => Some(w.points_shot_off_target),
        ResultCode::ShotBlocked => Some(w.points_shot_blocked),
        ResultCode::PenaltyBoxEntry if is_primary => Some(w.points_box_entry),
        ResultCode::WinPenalty if is_primary => Some(w.points_win_penalty),
        ResultCode::WinSetPiece if is_primary => Some(w.points_win_set_piece),
        _ => None,
    }
}

/// Steps 2 and 3. The two are gated on disjoint phase/outcome pairs, so both
/// are evaluated and summed.
pub fn pressing_adjustment(w: &ScoringWeights, event: &Event) -> f32 {
    let Some(zone) = event.press_zone() else {
        return 0.0;
    };

    let mut adj = 0.0;

    // Own team pressing the opponent's build-up.
    if event.possession_phase == PossessionPhase::OpponentAttack
        && event.outcome == Some(Outcome::Positive)
        && matches!(event.result_primary, None | Some(ResultCode::KeepPossession))
    {
        adj += match zone {
            PressingZone::High => w.bonus_press_high,
            PressingZone::Mid => w.bonus_press_mid,
            PressingZone::Low => w.bonus_press_low,
            PressingZone::None => 0.0,
        };
    }

    // Own team pressed out of possession. Keeping the ball costs nothing.
    if event.possession_phase == PossessionPhase::OwnAttack
        && event.outcome == Some(Outcome::Negative)
        && event.result_primary.is_none()
    {
        adj -= match zone {
            PressingZone::High => w.penalty_pressed_high,
            PressingZone::Mid => w.penalty_pressed_mid,
            PressingZone::Low => w.penalty_pressed_low,
            PressingZone::None => 0.0,
        };
    }

    adj
}

/// Step 4: possession won/lost on a transition with no further result.
pub fn transition_adjustment(w: &ScoringWeights, event: &Event) -> f32 {
    if !event.possession_phase.is_transition() {
        return 0.0;
    }

    let kept = match event.result_primary {
        None => false,
        Some(ResultCode::KeepPossession) => true,
        Some(_) => return 0.0,
    };

    match (event.possession_phase, event.outcome) {
        (PossessionPhase::TransitionToAttack, Some(Outcome::Positive)) => w.bonus_transition_win,
        (_, Some(Outcome::Negative)) if !kept => -w.penalty_transition_loss,
        _ => 0.0,
    }
}

pub fn score_details(scorer: &Scorer, event: &Event) -> ScoreDetails {
    let w = &scorer.weights;
    ScoreDetails::new(
        result_tier(w, event),
        pressing_adjustment(w, event),
        transition_adjustment(w, event),
    )
}

/// Fast path used by the batch scorer.
#[inline]
pub fn score(scorer: &Scorer, event: &Event) -> f32 {
    let w = &scorer.weights;
    result_tier(w, event) + pressing_adjustment(w, event) + transition_adjustment(w, event)
}
