use crate::error::{MmResult, MomentumError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum_macros::{Display, EnumString};

/// Which team an event is credited to. Positive momentum always favours `Own`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Own,
    Opponent,
    Neutral,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Own => Side::Opponent,
            Side::Opponent => Side::Own,
            Side::Neutral => Side::Neutral,
        }
    }

    /// +1 / -1 / 0, applied to result-tier magnitudes.
    pub fn sign(self) -> f32 {
        match self {
            Side::Own => 1.0,
            Side::Opponent => -1.0,
            Side::Neutral => 0.0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    #[strum(to_string = "1")]
    First,
    #[strum(to_string = "2")]
    Second,
}

impl Half {
    /// Parses the tagging tool's half column ("1.", "2.", "1", "2").
    pub fn from_code(value: &str, row: usize) -> MmResult<Self> {
        match value.trim().trim_end_matches('.').trim() {
            "1" => Ok(Half::First),
            "2" => Ok(Half::Second),
            _ => Err(MomentumError::InvalidHalf {
                value: value.to_string(),
                row,
            }),
        }
    }
}

/// Possession phase codes. First letter is the side in possession context,
/// second letter the direction momentum is moving.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum PossessionPhase {
    #[strum(to_string = "AA")]
    OwnAttack,
    #[strum(to_string = "DA")]
    TransitionToAttack,
    #[strum(to_string = "DD")]
    OpponentAttack,
    #[strum(to_string = "AD")]
    TransitionToDefense,
    #[strum(to_string = "?")]
    Unclassified,
}

impl PossessionPhase {
    pub fn is_transition(self) -> bool {
        matches!(
            self,
            PossessionPhase::TransitionToAttack | PossessionPhase::TransitionToDefense
        )
    }
}

/// The single place that decides which team a phase belongs to.
pub fn side_of(phase: PossessionPhase) -> Side {
    match phase {
        PossessionPhase::OwnAttack | PossessionPhase::TransitionToAttack => Side::Own,
        PossessionPhase::OpponentAttack | PossessionPhase::TransitionToDefense => Side::Opponent,
        PossessionPhase::Unclassified => Side::Neutral,
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[strum(to_string = "POS")]
    Positive,
    #[strum(to_string = "NEG")]
    Negative,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    #[strum(to_string = "SHOTGOAL")]
    Goal,
    #[strum(to_string = "SHOTON")]
    ShotOnTarget,
    #[strum(to_string = "SHOTOFF")]
    ShotOffTarget,
    #[strum(to_string = "SHOTBLOCK")]
    ShotBlocked,
    #[strum(to_string = "ENTRY")]
    PenaltyBoxEntry,
    #[strum(to_string = "WINPENALTY")]
    WinPenalty,
    #[strum(to_string = "WINSTANDARD")]
    WinSetPiece,
    #[strum(to_string = "KEEPPOS")]
    KeepPossession,
    // Any non-empty code outside the vocabulary. Never the empty marker.
    #[strum(to_string = "?")]
    Unrecognized,
}

impl ResultCode {
    pub fn is_shot(self) -> bool {
        matches!(
            self,
            ResultCode::Goal
                | ResultCode::ShotOnTarget
                | ResultCode::ShotOffTarget
                | ResultCode::ShotBlocked
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum PressingZone {
    #[strum(to_string = "HIGHPRESS", serialize = "HIGH")]
    High,
    #[strum(to_string = "MIDPRESS", serialize = "MID")]
    Mid,
    #[strum(to_string = "LOWPRESS", serialize = "LOW")]
    Low,
    #[strum(to_string = "NONE")]
    None,
}

impl PressingZone {
    /// True for the three zones that represent an actual pressing action.
    pub fn is_press(self) -> bool {
        !matches!(self, PressingZone::None)
    }
}

/// One tagged match event, exactly as it came out of the tagging tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub start_offset: Duration,
    pub duration: Duration,
    pub half: Half,
    pub possession_phase: PossessionPhase,
    pub outcome: Option<Outcome>,
    pub result_primary: Option<ResultCode>,
    pub result_secondary: Option<ResultCode>,
    pub result_tertiary: Option<ResultCode>,
    pub pressing_zone: Option<PressingZone>,
}

impl Event {
    /// A bare event with no outcome, results or pressing tag.
    pub fn new(half: Half, start_offset: Duration, possession_phase: PossessionPhase) -> Self {
        Self {
            start_offset,
            duration: Duration::ZERO,
            half,
            possession_phase,
            outcome: None,
            result_primary: None,
            result_secondary: None,
            result_tertiary: None,
            pressing_zone: None,
        }
    }

    pub fn side(&self) -> Side {
        side_of(self.possession_phase)
    }

    /// Result slots in evaluation order: primary, secondary, tertiary.
    pub fn result_slots(&self) -> [Option<ResultCode>; 3] {
        [
            self.result_primary,
            self.result_secondary,
            self.result_tertiary,
        ]
    }

    /// The pressing zone, but only if it marks a real press.
    pub fn press_zone(&self) -> Option<PressingZone> {
        self.pressing_zone.filter(|z| z.is_press())
    }
}

/// An event with its signed momentum score attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEvent {
    #[serde(flatten)]
    pub event: Event,
    pub momentum_score: f32,
}
