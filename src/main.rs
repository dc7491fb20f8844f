use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use match_momentum::config::{Config, ScoringWeights};
use match_momentum::scorer::Scorer;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON rule table. Explicit --points-*/--bonus-*/--penalty-* flags override it.
    #[arg(global = true, long)]
    weights: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Momentum timeline, team stats, pressing and transition reports.
    Analyze(cmd::analyze::AnalyzeArgs),
    /// Per-event score breakdown.
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    info!("🚀 Initializing Match Momentum...");

    let mut config = match &cli.command {
        Commands::Analyze(args) => args.config.clone(),
        // Scoring only; interval settings do not apply.
        Commands::Score(args) => Config {
            weights: args.weights.clone(),
            ..Default::default()
        },
    };

    // JSON weights become the base; flags typed on the command line win.
    if let Some(path) = &cli.weights {
        info!("⚖️  Loading Weights from: {}", path.display());
        let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });
        if let Some((_, sub_matches)) = matches.subcommand() {
            file_weights.merge_from_cli(&config.weights, sub_matches);
        }
        config.weights = file_weights;
    } else {
        warn!("⚠️  No external weights loaded. Using embedded defaults.");
    }

    let scorer = match Scorer::new(config.weights.clone()) {
        Ok(s) => s,
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, config, &scorer),
        Commands::Score(args) => cmd::score::run(args, &scorer),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
