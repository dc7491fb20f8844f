#![allow(dead_code)]

use match_momentum::events::{
    Event, Half, Outcome, PossessionPhase, PressingZone, ResultCode, ScoredEvent,
};
use std::time::Duration;

/// Builder for Event to keep the tests readable.
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    pub fn new(phase: PossessionPhase) -> Self {
        Self {
            event: Event::new(Half::First, Duration::from_secs(60), phase),
        }
    }

    pub fn at(mut self, half: Half, secs: u64) -> Self {
        self.event.half = half;
        self.event.start_offset = Duration::from_secs(secs);
        self
    }

    pub fn lasting(mut self, secs: u64) -> Self {
        self.event.duration = Duration::from_secs(secs);
        self
    }

    pub fn outcome(mut self, outcome: Outcome) -> Self {
        self.event.outcome = Some(outcome);
        self
    }

    pub fn result(mut self, code: ResultCode) -> Self {
        self.event.result_primary = Some(code);
        self
    }

    pub fn secondary(mut self, code: ResultCode) -> Self {
        self.event.result_secondary = Some(code);
        self
    }

    pub fn tertiary(mut self, code: ResultCode) -> Self {
        self.event.result_tertiary = Some(code);
        self
    }

    pub fn press(mut self, zone: PressingZone) -> Self {
        self.event.pressing_zone = Some(zone);
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// A pre-scored event, for aggregation tests that do not care about the rules.
pub fn scored(half: Half, secs: u64, phase: PossessionPhase, score: f32) -> ScoredEvent {
    ScoredEvent {
        event: EventBuilder::new(phase).at(half, secs).build(),
        momentum_score: score,
    }
}

pub const CSV_HEADER: &str =
    "Name;Position;Duration;Poolaeg;Põhimoment;Outcome;Result;Shot2;Shot3;Pressing";
