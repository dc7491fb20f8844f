pub mod engine;
pub mod types;

pub use self::types::ScoreDetails;
use crate::config::ScoringWeights;
use crate::error::MmResult;
use crate::events::{Event, ScoredEvent};
use rayon::prelude::*;

/// Assigns a signed momentum score to events using an injected rule table.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> MmResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn score(&self, event: &Event) -> f32 {
        engine::score(self, event)
    }

    /// Step-by-step breakdown for reports.
    pub fn score_details(&self, event: &Event) -> ScoreDetails {
        engine::score_details(self, event)
    }

    /// Scores every event in parallel. Output keeps input order and length.
    pub fn score_all(&self, events: &[Event]) -> Vec<ScoredEvent> {
        events
            .par_iter()
            .map(|e| ScoredEvent {
                event: e.clone(),
                momentum_score: self.score(e),
            })
            .collect()
    }
}
