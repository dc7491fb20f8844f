use super::MatchInput;
use crate::reports;
use clap::Args;
use match_momentum::config::ScoringWeights;
use match_momentum::error::MmResult;
use match_momentum::loader;
use match_momentum::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub input: MatchInput,

    #[command(flatten)]
    pub weights: ScoringWeights,

    /// Only print the first N events.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) -> MmResult<()> {
    let events = loader::load_match(&args.input.first_half, &args.input.second_half)?;
    let scored = scorer.score_all(&events);

    println!("\n🔎 === EVENT SCORES === 🔎");
    reports::print_event_breakdown(scorer, &scored, args.limit);

    let total: f32 = scored.iter().map(|s| s.momentum_score).sum();
    println!("Total momentum score: {:+.0}", total);
    Ok(())
}
