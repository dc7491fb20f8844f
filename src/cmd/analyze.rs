use super::MatchInput;
use crate::reports;
use clap::Args;
use match_momentum::api;
use match_momentum::config::Config;
use match_momentum::error::MmResult;
use match_momentum::loader;
use match_momentum::scorer::Scorer;
use std::fs::File;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: MatchInput,

    #[command(flatten)]
    pub config: Config,

    /// Write the full analysis as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the interval table as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    #[arg(long, default_value = "Own")]
    pub own_name: String,

    #[arg(long, default_value = "Opponent")]
    pub opponent_name: String,
}

pub fn run(args: AnalyzeArgs, config: Config, scorer: &Scorer) -> MmResult<()> {
    config.analysis.validate()?;
    let events = loader::load_match(&args.input.first_half, &args.input.second_half)?;
    let analysis = api::analyze_with(scorer, &events, &config);

    println!("\n⚽ === MATCH MOMENTUM === ⚽");
    reports::print_momentum_report(&analysis.intervals, analysis.summary.as_ref());
    reports::print_team_stats(&analysis.team_stats, &args.own_name, &args.opponent_name);
    reports::print_pressing_report(&analysis.pressing);
    reports::print_transition_report(&analysis.transitions);

    if let Some(path) = &args.json {
        api::write_json(&analysis, path)?;
        info!("💾 Analysis written to {}", path.display());
    }

    if let Some(path) = &args.csv {
        api::write_intervals_csv(&analysis.intervals, File::create(path)?)?;
        info!("💾 Intervals written to {}", path.display());
    }

    Ok(())
}
