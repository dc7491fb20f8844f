use crate::events::{Event, Half, PossessionPhase, ResultCode};
use crate::timeline::percentage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionEffectiveness {
    pub total: usize,
    pub to_shots: usize,
    pub to_entries: usize,
    pub shot_rate: f32,
    pub entry_rate: f32,
}

impl TransitionEffectiveness {
    fn finish(mut self) -> Self {
        self.shot_rate = percentage(self.to_shots, self.total);
        self.entry_rate = percentage(self.to_entries, self.total);
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionSummary {
    pub total: usize,
    /// DA: own team won the ball.
    pub own_gained: usize,
    /// AD: own team lost the ball.
    pub own_lost: usize,
    pub to_shots: usize,
    pub to_entries: usize,
    pub shot_rate: f32,
    pub first_half: usize,
    pub second_half: usize,
    pub avg_duration_secs: f32,
    pub gained: TransitionEffectiveness,
    pub lost: TransitionEffectiveness,
}

pub fn summarize(events: &[Event]) -> TransitionSummary {
    let mut out = TransitionSummary::default();
    let mut duration_total = 0.0f64;

    for e in events.iter().filter(|e| e.possession_phase.is_transition()) {
        out.total += 1;
        duration_total += e.duration.as_secs_f64();

        match e.half {
            Half::First => out.first_half += 1,
            Half::Second => out.second_half += 1,
        }

        let shot = e.result_primary.is_some_and(ResultCode::is_shot);
        let entry = e.result_primary == Some(ResultCode::PenaltyBoxEntry);
        if shot {
            out.to_shots += 1;
        }
        if entry {
            out.to_entries += 1;
        }

        let kind = if e.possession_phase == PossessionPhase::TransitionToAttack {
            out.own_gained += 1;
            &mut out.gained
        } else {
            out.own_lost += 1;
            &mut out.lost
        };
        kind.total += 1;
        kind.to_shots += usize::from(shot);
        kind.to_entries += usize::from(entry);
    }

    out.shot_rate = percentage(out.to_shots, out.total);
    if out.total > 0 {
        out.avg_duration_secs = (duration_total / out.total as f64) as f32;
    }
    out.gained = out.gained.finish();
    out.lost = out.lost.finish();
    out
}
