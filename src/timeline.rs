use crate::config::AnalysisParams;
use crate::events::{Event, Half, PossessionPhase, ResultCode, ScoredEvent, Side};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalBucket {
    pub interval_index: u32,
    pub interval_label: String,
    pub interval_momentum_sum: f32,
    pub cumulative_momentum: f32,
    pub event_count: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideStats {
    pub goals: usize,
    pub shots_on_target: usize,
    pub shots_off_target: usize,
    pub shots_blocked: usize,
    pub entries: usize,
    pub possession_pct: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub own: SideStats,
    pub opponent: SideStats,
}

impl TeamStats {
    pub fn side(&self, side: Side) -> Option<&SideStats> {
        match side {
            Side::Own => Some(&self.own),
            Side::Opponent => Some(&self.opponent),
            Side::Neutral => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumSummary {
    pub total_momentum: f32,
    pub final_cumulative: f32,
    pub peak: IntervalBucket,
    pub lowest: IntervalBucket,
}

/// Seconds since kickoff of the match, second half shifted by the configured offset.
pub fn absolute_secs(event: &Event, params: &AnalysisParams) -> f64 {
    let base = event.start_offset.as_secs_f64();
    match event.half {
        Half::First => base,
        Half::Second => base + params.second_half_offset_secs as f64,
    }
}

pub fn interval_index(event: &Event, params: &AnalysisParams) -> u32 {
    (absolute_secs(event, params) / params.interval_secs as f64).floor() as u32
}

/// "0-5", "5-10", ... in whole minutes.
pub fn interval_label(index: u32, params: &AnalysisParams) -> String {
    let width = params.interval_secs as u64;
    let start = index as u64 * width;
    let end = start + width;
    format!("{}-{}", fmt_minutes(start), fmt_minutes(end))
}

fn fmt_minutes(secs: u64) -> String {
    if secs % 60 == 0 {
        (secs / 60).to_string()
    } else {
        format!("{:.1}", secs as f64 / 60.0)
    }
}

pub fn aggregate(
    scored: &[ScoredEvent],
    params: &AnalysisParams,
) -> (Vec<IntervalBucket>, TeamStats) {
    (build_intervals(scored, params), team_stats(scored))
}

/// Groups scores by interval and derives the running total. Ordering comes
/// from the index, never from input order.
pub fn build_intervals(scored: &[ScoredEvent], params: &AnalysisParams) -> Vec<IntervalBucket> {
    let mut sums: BTreeMap<u32, (f32, usize)> = BTreeMap::new();
    for s in scored {
        let slot = sums
            .entry(interval_index(&s.event, params))
            .or_insert((0.0, 0));
        slot.0 += s.momentum_score;
        slot.1 += 1;
    }

    if params.fill_empty_intervals {
        if let Some(&last) = sums.keys().next_back() {
            for idx in 0..last {
                sums.entry(idx).or_insert((0.0, 0));
            }
        }
    }

    let mut cumulative = 0.0;
    let buckets: Vec<IntervalBucket> = sums
        .into_iter()
        .map(|(idx, (sum, count))| {
            cumulative += sum;
            IntervalBucket {
                interval_index: idx,
                interval_label: interval_label(idx, params),
                interval_momentum_sum: sum,
                cumulative_momentum: cumulative,
                event_count: count,
            }
        })
        .collect();

    debug!(
        "Aggregated {} events into {} intervals",
        scored.len(),
        buckets.len()
    );
    buckets
}

pub fn team_stats(scored: &[ScoredEvent]) -> TeamStats {
    let mut stats = TeamStats::default();
    let mut own_pure = 0usize;
    let mut opp_pure = 0usize;

    for s in scored {
        let e = &s.event;
        match e.possession_phase {
            PossessionPhase::OwnAttack => own_pure += 1,
            PossessionPhase::OpponentAttack => opp_pure += 1,
            _ => {}
        }

        let side = match e.side() {
            Side::Own => &mut stats.own,
            Side::Opponent => &mut stats.opponent,
            Side::Neutral => continue,
        };
        match e.result_primary {
            Some(ResultCode::Goal) => side.goals += 1,
            Some(ResultCode::ShotOnTarget) => side.shots_on_target += 1,
            Some(ResultCode::ShotOffTarget) => side.shots_off_target += 1,
            Some(ResultCode::ShotBlocked) => side.shots_blocked += 1,
            Some(ResultCode::PenaltyBoxEntry) => side.entries += 1,
            _ => {}
        }
    }

    stats.own.possession_pct = percentage(own_pure, own_pure + opp_pure);
    stats.opponent.possession_pct = percentage(opp_pure, own_pure + opp_pure);
    stats
}

/// Share of `part` in `whole` as a percentage rounded to one decimal; 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    ((pct * 10.0).round() / 10.0) as f32
}

/// Match-level readout. Ties on peak/lowest go to the earliest interval.
pub fn summarize(buckets: &[IntervalBucket]) -> Option<MomentumSummary> {
    let first = buckets.first()?;
    let mut peak = first;
    let mut lowest = first;
    let mut total = 0.0;

    for b in buckets {
        total += b.interval_momentum_sum;
        if b.interval_momentum_sum > peak.interval_momentum_sum {
            peak = b;
        }
        if b.interval_momentum_sum < lowest.interval_momentum_sum {
            lowest = b;
        }
    }

    Some(MomentumSummary {
        total_momentum: total,
        final_cumulative: buckets.last().map_or(0.0, |b| b.cumulative_momentum),
        peak: peak.clone(),
        lowest: lowest.clone(),
    })
}
