//! Headless dice simulation
//!
//! Plays one seeded game and prints the analysis as JSON or text.

use clap::{Parser, ValueEnum};
use dice_core::{load_config, GameConfig, ShowForm};
use dice_tui::{SimulationError, SimulationRun};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Headless dice simulation - play a game and report its statistics
#[derive(Parser, Debug)]
#[command(name = "dice_sim")]
#[command(about = "Roll weighted dice and report jackpots and outcome counts")]
struct Args {
    /// TOML game configuration (overrides --sides/--dice)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sides per die when no config is given
    #[arg(long, default_value_t = 6)]
    sides: u32,

    /// Number of fair dice when no config is given
    #[arg(long, default_value_t = 2)]
    dice: usize,

    /// Rolls per play (overrides the config value)
    #[arg(long)]
    rolls: Option<usize>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Also print the raw results in this form (wide or narrow)
    #[arg(long)]
    form: Option<ShowForm>,

    /// Combination/permutation rows to print in text output
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, SimulationError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::fair(args.sides, args.dice),
    };
    if let Some(rolls) = args.rolls {
        config.num_rolls = rolls;
    }

    // Determine seed
    let seed = args
        .seed
        .or(config.seed)
        .unwrap_or_else(rand::random);

    let sim = SimulationRun::run(&config, seed)?;
    let output = sim.output(args.form)?;

    match args.format {
        OutputFormat::Json => output.to_json(),
        OutputFormat::Text => Ok(output.to_text(args.top)),
    }
}
