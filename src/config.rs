use crate::error::{MmResult, MomentumError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub analysis: AnalysisParams,
    #[command(flatten)]
    pub weights: ScoringWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParams {
    /// Width of one momentum interval in seconds.
    #[arg(long, default_value_t = 300)]
    pub interval_secs: u32,

    /// Added to every second-half timestamp to get absolute match time.
    #[arg(long, default_value_t = 2700)]
    pub second_half_offset_secs: u32,

    /// Emit zero-sum buckets for intervals without events.
    #[arg(long, default_value_t = false)]
    pub fill_empty_intervals: bool,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            interval_secs: 300,
            second_half_offset_secs: 2700,
            fill_empty_intervals: false,
        }
    }
}

impl AnalysisParams {
    pub fn validate(&self) -> MmResult<()> {
        if self.interval_secs == 0 {
            return Err(MomentumError::Config(
                "interval_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// The momentum rule table. Magnitudes only; the scorer applies the sign.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === RESULT TIER ===
    #[arg(long, default_value_t = 20.0)]
    pub points_goal: f32,
    #[arg(long, default_value_t = 18.0)]
    pub points_shot_on_target: f32,
    #[arg(long, default_value_t = 10.0)]
    pub points_shot_off_target: f32,
    #[arg(long, default_value_t = 6.0)]
    pub points_shot_blocked: f32,
    #[arg(long, default_value_t = 17.0)]
    pub points_box_entry: f32,
    #[arg(long, default_value_t = 14.0)]
    pub points_win_penalty: f32,
    #[arg(long, default_value_t = 6.0)]
    pub points_win_set_piece: f32,

    // === PRESSING (own team presses, opponent in possession) ===
    #[arg(long, default_value_t = 3.0)]
    pub bonus_press_high: f32,
    #[arg(long, default_value_t = 2.0)]
    pub bonus_press_mid: f32,
    #[arg(long, default_value_t = 1.0)]
    pub bonus_press_low: f32,

    // === PRESSED (own team loses the ball under pressure) ===
    #[arg(long, default_value_t = 3.0)]
    pub penalty_pressed_high: f32,
    #[arg(long, default_value_t = 2.0)]
    pub penalty_pressed_mid: f32,
    #[arg(long, default_value_t = 1.0)]
    pub penalty_pressed_low: f32,

    // === TRANSITIONS ===
    #[arg(long, default_value_t = 1.0)]
    pub bonus_transition_win: f32,
    #[arg(long, default_value_t = 1.0)]
    pub penalty_transition_loss: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            points_goal: 20.0,
            points_shot_on_target: 18.0,
            points_shot_off_target: 10.0,
            points_shot_blocked: 6.0,
            points_box_entry: 17.0,
            points_win_penalty: 14.0,
            points_win_set_piece: 6.0,
            bonus_press_high: 3.0,
            bonus_press_mid: 2.0,
            bonus_press_low: 1.0,
            penalty_pressed_high: 3.0,
            penalty_pressed_mid: 2.0,
            penalty_pressed_low: 1.0,
            bonus_transition_win: 1.0,
            penalty_transition_loss: 1.0,
        }
    }
}

impl ScoringWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MmResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            MomentumError::Config(format!(
                "Failed to read weights file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let weights: ScoringWeights = serde_json::from_str(&content)?;
        weights.validate()?;
        Ok(weights)
    }

    fn named_values(&self) -> [(&'static str, f32); 15] {
        [
            ("points_goal", self.points_goal),
            ("points_shot_on_target", self.points_shot_on_target),
            ("points_shot_off_target", self.points_shot_off_target),
            ("points_shot_blocked", self.points_shot_blocked),
            ("points_box_entry", self.points_box_entry),
            ("points_win_penalty", self.points_win_penalty),
            ("points_win_set_piece", self.points_win_set_piece),
            ("bonus_press_high", self.bonus_press_high),
            ("bonus_press_mid", self.bonus_press_mid),
            ("bonus_press_low", self.bonus_press_low),
            ("penalty_pressed_high", self.penalty_pressed_high),
            ("penalty_pressed_mid", self.penalty_pressed_mid),
            ("penalty_pressed_low", self.penalty_pressed_low),
            ("bonus_transition_win", self.bonus_transition_win),
            ("penalty_transition_loss", self.penalty_transition_loss),
        ]
    }

    /// Every entry is a magnitude: finite and non-negative.
    pub fn validate(&self) -> MmResult<()> {
        for (name, value) in self.named_values() {
            if !value.is_finite() || value < 0.0 {
                return Err(MomentumError::Config(format!(
                    "Weight '{}' must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_weights: &ScoringWeights, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_weights.$field;
                }
            };
        }

        update_if_present!(points_goal);
        update_if_present!(points_shot_on_target);
        update_if_present!(points_shot_off_target);
        update_if_present!(points_shot_blocked);
        update_if_present!(points_box_entry);
        update_if_present!(points_win_penalty);
        update_if_present!(points_win_set_piece);

        update_if_present!(bonus_press_high);
        update_if_present!(bonus_press_mid);
        update_if_present!(bonus_press_low);

        update_if_present!(penalty_pressed_high);
        update_if_present!(penalty_pressed_mid);
        update_if_present!(penalty_pressed_low);

        update_if_present!(bonus_transition_win);
        update_if_present!(penalty_transition_loss);
    }
}
