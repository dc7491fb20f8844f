pub mod analyze;
pub mod score;

use clap::Args;
use std::path::PathBuf;

/// The two per-half exports of one fixture.
#[derive(Args, Debug, Clone)]
pub struct MatchInput {
    #[arg(long)]
    pub first_half: PathBuf,

    #[arg(long)]
    pub second_half: PathBuf,
}
