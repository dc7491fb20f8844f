use crate::config::Config;
use crate::error::MmResult;
use crate::events::{Event, ScoredEvent};
use crate::pressing::{self, PressingSummary};
use crate::scorer::Scorer;
use crate::timeline::{self, IntervalBucket, MomentumSummary, TeamStats};
use crate::transitions::{self, TransitionSummary};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Everything derived from one fixture.
#[derive(Serialize, Debug, Clone)]
pub struct MatchAnalysis {
    pub scored_events: Vec<ScoredEvent>,
    pub intervals: Vec<IntervalBucket>,
    pub team_stats: TeamStats,
    pub summary: Option<MomentumSummary>,
    pub pressing: PressingSummary,
    pub transitions: TransitionSummary,
}

/// Service: score, aggregate and summarise a full match.
pub fn analyze_match(events: &[Event], config: &Config) -> MmResult<MatchAnalysis> {
    config.analysis.validate()?;
    let scorer = Scorer::new(config.weights.clone())?;
    Ok(analyze_with(&scorer, events, config))
}

/// Same as [`analyze_match`] but reuses an already-built scorer.
pub fn analyze_with(scorer: &Scorer, events: &[Event], config: &Config) -> MatchAnalysis {
    let scored_events = scorer.score_all(events);
    let (intervals, team_stats) = timeline::aggregate(&scored_events, &config.analysis);
    let summary = timeline::summarize(&intervals);

    info!(
        "✅ Analysis complete: {} events, {} intervals",
        scored_events.len(),
        intervals.len()
    );

    MatchAnalysis {
        pressing: pressing::summarize(events),
        transitions: transitions::summarize(events),
        scored_events,
        intervals,
        team_stats,
        summary,
    }
}

pub fn write_json<P: AsRef<Path>>(analysis: &MatchAnalysis, path: P) -> MmResult<()> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, analysis)?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Interval table as CSV, one row per bucket.
pub fn write_intervals_csv<W: Write>(intervals: &[IntervalBucket], writer: W) -> MmResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for b in intervals {
        wtr.serialize(b)?;
    }
    wtr.flush()?;
    Ok(())
}
