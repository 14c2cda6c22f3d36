//! Streak Dashboard CLI
//!
//! Renders the playoff-streak dashboard once per invocation, or runs one of
//! its building blocks (simulation, exact model, momentum paths) on its own.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use streak_cli::{OutputFormat, Overrides};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "streak_dashboard")]
#[command(about = "IPL playoff streak analysis dashboard", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[cfg(feature = "cli")]
impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Markdown => OutputFormat::Markdown,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct SimulationArgs {
    /// YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Per-match win probability in [0, 1]
    #[arg(long)]
    win_probability: Option<f64>,

    /// Per-match no-result probability in [0, 1]
    #[arg(long)]
    no_result_probability: Option<f64>,

    /// Number of simulated seasons
    #[arg(long)]
    simulations: Option<usize>,

    /// Matches per season
    #[arg(long)]
    matches: Option<u32>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Spread trials across all cores
    #[arg(long, default_value = "false")]
    parallel: bool,
}

#[cfg(feature = "cli")]
impl SimulationArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            win_probability: self.win_probability,
            no_result_probability: self.no_result_probability,
            simulations: self.simulations,
            match_count: self.matches,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Render the full dashboard
    Dashboard(SimulationArgs),

    /// Run the streak simulation and print its histogram
    Simulate(SimulationArgs),

    /// Exact streak-capped probabilities
    MathModel {
        #[arg(long, default_value_t = 0.5)]
        win_probability: f64,

        #[arg(long, default_value_t = 14)]
        matches: u32,

        /// Longest allowed run of consecutive wins
        #[arg(long, default_value_t = 2)]
        max_run: u32,

        #[arg(long, default_value_t = 7)]
        target_wins: u32,
    },

    /// Cumulative points of the real team paths
    Momentum,
}

#[cfg(feature = "cli")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,streak_core=info,streak_cli=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let format = OutputFormat::from(cli.format);

    let output = match cli.command {
        Commands::Dashboard(args) => {
            let cfg = streak_cli::resolve_config(args.config.as_deref(), &args.overrides())?;
            streak_cli::dashboard(&cfg, format)?
        }
        Commands::Simulate(args) => {
            let cfg = streak_cli::resolve_config(args.config.as_deref(), &args.overrides())?;
            streak_cli::simulate(&cfg, format)?
        }
        Commands::MathModel { win_probability, matches, max_run, target_wins } => {
            streak_cli::math_model(win_probability, matches, max_run, target_wins, format)?
        }
        Commands::Momentum => {
            streak_cli::momentum(&streak_core::PointSystem::default(), format)?
        }
    };

    print!("{}", output);
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("streak_dashboard CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
