use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use match_momentum::events::ScoredEvent;
use match_momentum::pressing::PressingSummary;
use match_momentum::scorer::Scorer;
use match_momentum::timeline::{IntervalBucket, MomentumSummary, TeamStats};
use match_momentum::transitions::TransitionSummary;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn signed_cell(value: f32) -> Cell {
    let cell = Cell::new(format!("{:+.0}", value));
    if value > 0.0 {
        cell.fg(Color::Green)
    } else if value < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

pub fn momentum(intervals: &[IntervalBucket], summary: Option<&MomentumSummary>) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Interval").add_attribute(Attribute::Bold),
        Cell::new("Events"),
        Cell::new("Momentum").fg(Color::Cyan),
        Cell::new("Cumulative").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 1..=3);

    for b in intervals {
        table.add_row(vec![
            Cell::new(&b.interval_label).add_attribute(Attribute::Bold),
            Cell::new(b.event_count),
            signed_cell(b.interval_momentum_sum),
            signed_cell(b.cumulative_momentum).add_attribute(Attribute::Bold),
        ]);
    }
    println!("\n{}", table);

    if let Some(s) = summary {
        println!("Total momentum score: {:+.0}", s.total_momentum);
        println!(
            "Peak momentum interval: {} ({:+.0})",
            s.peak.interval_label, s.peak.interval_momentum_sum
        );
        println!(
            "Lowest momentum interval: {} ({:+.0})",
            s.lowest.interval_label, s.lowest.interval_momentum_sum
        );
    }
}

pub fn team_stats(stats: &TeamStats, own_name: &str, opponent_name: &str) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new(own_name).fg(Color::Cyan),
        Cell::new(opponent_name).fg(Color::Red),
    ]);
    align_right(&mut table, 1..=2);

    let (o, p) = (&stats.own, &stats.opponent);
    let rows: [(&str, String, String); 6] = [
        ("Goals", o.goals.to_string(), p.goals.to_string()),
        (
            "Shots on Target",
            o.shots_on_target.to_string(),
            p.shots_on_target.to_string(),
        ),
        (
            "Shots off Target",
            o.shots_off_target.to_string(),
            p.shots_off_target.to_string(),
        ),
        (
            "Shots Blocked",
            o.shots_blocked.to_string(),
            p.shots_blocked.to_string(),
        ),
        ("Entries", o.entries.to_string(), p.entries.to_string()),
        (
            "Possession %",
            format!("{:.1}", o.possession_pct),
            format!("{:.1}", p.possession_pct),
        ),
    ];
    for (metric, own, opp) in rows {
        table.add_row(vec![Cell::new(metric), Cell::new(own), Cell::new(opp)]);
    }

    println!(
        "\n{} {} - {} {}",
        own_name, o.goals, p.goals, opponent_name
    );
    println!("{}", table);
}

pub fn pressing(summary: &PressingSummary) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Pressing Team").add_attribute(Attribute::Bold),
        Cell::new("Zone"),
        Cell::new("Total"),
        Cell::new("Won"),
        Cell::new("Rate %").fg(Color::Cyan),
    ]);
    align_right(&mut table, 2..=4);

    for ((team, zone), c) in &summary.by_team_zone {
        table.add_row(vec![
            Cell::new(team.to_string()).add_attribute(Attribute::Bold),
            Cell::new(zone.to_string()),
            Cell::new(c.total),
            Cell::new(c.successful),
            Cell::new(format!("{:.1}", c.success_rate)).fg(Color::Cyan),
        ]);
    }
    table.add_row(vec![
        Cell::new("All").add_attribute(Attribute::Bold),
        Cell::new("-"),
        Cell::new(summary.total),
        Cell::new(summary.successful),
        Cell::new(format!("{:.1}", summary.success_rate)).add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
    match summary.ppda {
        Some(ppda) => println!("PPDA: {:.2}", ppda),
        None => println!("PPDA: n/a"),
    }
}

pub fn transitions(summary: &TransitionSummary) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Transition").add_attribute(Attribute::Bold),
        Cell::new("Total"),
        Cell::new("Shots"),
        Cell::new("Entries"),
        Cell::new("Shot %").fg(Color::Cyan),
        Cell::new("Entry %"),
    ]);
    align_right(&mut table, 1..=5);

    for (name, e) in [("Gained (DA)", &summary.gained), ("Lost (AD)", &summary.lost)] {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(e.total),
            Cell::new(e.to_shots),
            Cell::new(e.to_entries),
            Cell::new(format!("{:.1}", e.shot_rate)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", e.entry_rate)),
        ]);
    }
    println!("\n{}", table);
    println!(
        "Transitions: {} (1st half {}, 2nd half {}), avg duration {:.1}s",
        summary.total, summary.first_half, summary.second_half, summary.avg_duration_secs
    );
}

pub fn event_breakdown(scorer: &Scorer, scored: &[ScoredEvent], limit: Option<usize>) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Half").add_attribute(Attribute::Bold),
        Cell::new("Time"),
        Cell::new("Phase"),
        Cell::new("Outcome"),
        Cell::new("Result"),
        Cell::new("Press"),
        Cell::new("Tier"),
        Cell::new("Press±"),
        Cell::new("Trans±"),
        Cell::new("Score").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 6..=9);

    let shown = limit.unwrap_or(scored.len()).min(scored.len());
    for s in &scored[..shown] {
        let e = &s.event;
        let d = scorer.score_details(e);
        let secs = e.start_offset.as_secs();
        table.add_row(vec![
            Cell::new(e.half.to_string()),
            Cell::new(format!("{:02}:{:02}", secs / 60, secs % 60)),
            Cell::new(e.possession_phase.to_string()),
            Cell::new(e.outcome.map_or("-".to_string(), |o| o.to_string())),
            Cell::new(e.result_primary.map_or("-".to_string(), |r| r.to_string())),
            Cell::new(e.pressing_zone.map_or("-".to_string(), |z| z.to_string())),
            Cell::new(format!("{:.0}", d.result_tier)),
            Cell::new(format!("{:.0}", d.pressing)),
            Cell::new(format!("{:.0}", d.transition)),
            signed_cell(s.momentum_score).add_attribute(Attribute::Bold),
        ]);
    }
    println!("\n{}", table);
    if shown < scored.len() {
        println!("... {} more events not shown", scored.len() - shown);
    }
}
