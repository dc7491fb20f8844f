use crate::events::{
    side_of, Event, Half, Outcome, PossessionPhase, PressingZone, ResultCode, Side,
};
use crate::timeline::percentage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressingCounts {
    pub total: usize,
    pub successful: usize,
    pub success_rate: f32,
}

impl PressingCounts {
    fn record(&mut self, success: bool) {
        self.total += 1;
        if success {
            self.successful += 1;
        }
        self.success_rate = percentage(self.successful, self.total);
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressingSummary {
    pub total: usize,
    pub successful: usize,
    pub success_rate: f32,
    pub by_zone: Vec<(PressingZone, PressingCounts)>,
    pub by_team: Vec<(Side, PressingCounts)>,
    pub by_half: Vec<(Half, PressingCounts)>,
    pub by_team_zone: Vec<((Side, PressingZone), PressingCounts)>,
    /// Passes per defensive action, two decimals. `None` without kept-possession
    /// presses or without defensive actions.
    pub ppda: Option<f32>,
}

/// The team applying the press is the one out of possession. Transition
/// phases are attributed to neither side.
pub fn pressing_side(phase: PossessionPhase) -> Side {
    if phase.is_transition() {
        Side::Neutral
    } else {
        side_of(phase).opposite()
    }
}

pub fn summarize(events: &[Event]) -> PressingSummary {
    let mut overall = PressingCounts::default();
    let mut by_zone: BTreeMap<PressingZone, PressingCounts> = BTreeMap::new();
    let mut by_team: BTreeMap<Side, PressingCounts> = BTreeMap::new();
    let mut by_half: BTreeMap<Half, PressingCounts> = BTreeMap::new();
    let mut by_team_zone: BTreeMap<(Side, PressingZone), PressingCounts> = BTreeMap::new();
    let mut passes = 0usize;
    let mut defensive_actions = 0usize;

    for e in events {
        let Some(zone) = e.press_zone() else {
            continue;
        };
        let success = e.outcome == Some(Outcome::Positive);
        let team = pressing_side(e.possession_phase);
        let kept = e.result_primary == Some(ResultCode::KeepPossession);
        if kept {
            passes += 1;
        } else if success {
            defensive_actions += 1;
        }

        overall.record(success);
        by_zone.entry(zone).or_default().record(success);
        by_team.entry(team).or_default().record(success);
        by_half.entry(e.half).or_default().record(success);
        by_team_zone.entry((team, zone)).or_default().record(success);
    }

    PressingSummary {
        total: overall.total,
        successful: overall.successful,
        success_rate: overall.success_rate,
        by_zone: by_zone.into_iter().collect(),
        by_team: by_team.into_iter().collect(),
        by_half: by_half.into_iter().collect(),
        by_team_zone: by_team_zone.into_iter().collect(),
        ppda: ppda(passes, defensive_actions),
    }
}

fn ppda(passes: usize, defensive_actions: usize) -> Option<f32> {
    if passes == 0 || defensive_actions == 0 {
        return None;
    }
    let ratio = passes as f64 / defensive_actions as f64;
    Some(((ratio * 100.0).round() / 100.0) as f32)
}
