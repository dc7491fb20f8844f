use serde::{Deserialize, Serialize};

/// Per-step breakdown of a single event's momentum score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    // Step 1: signed result-tier value (goal, shots, entry, set pieces)
    pub result_tier: f32,

    // Steps 2 + 3: pressing bonus or pressed-out penalty
    pub pressing: f32,

    // Step 4
    pub transition: f32,

    pub total: f32,
}

impl ScoreDetails {
    pub fn new(result_tier: f32, pressing: f32, transition: f32) -> Self {
        Self {
            result_tier,
            pressing,
            transition,
            total: result_tier + pressing + transition,
        }
    }
}
