//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use crate::commands::{self, Context};
use taskrank::clock::FixedClock;
use taskrank::config::{CONFIG_ENV, Config};
use taskrank::models::parse_timestamp;
use taskrank::output::OutputMode;
use taskrank::ranking::DEFAULT_TOP_LIMIT;
use taskrank::scoring::TaskScorer;

/// taskrank - Score and rank tasks by urgency
#[derive(Parser, Debug)]
#[command(
    name = "taskrank",
    version,
    about = "Score and rank tasks by urgency",
    long_about = "Score and rank tasks by urgency.\n\n\
                  Scores combine priority, deadline proximity, status, critical tags\n\
                  and how recently a task was updated. Higher scores come first."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Scoring config file (TOML)
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Score as of this instant instead of the current time (RFC3339 or YYYY-MM-DD)
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score every task, in file order
    Score {
        /// Task file (.toml or .json)
        file: PathBuf,
    },

    /// List every task, highest score first
    Rank {
        /// Task file (.toml or .json)
        file: PathBuf,
    },

    /// List the highest-scoring tasks
    Top {
        /// Task file (.toml or .json)
        file: PathBuf,

        /// How many tasks to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },

    /// Show how one task's score is made up
    Explain {
        /// Task file (.toml or .json)
        file: PathBuf,

        /// Task id, or #N for the N-th task in the file
        id: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("taskrank v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'taskrank --help' for usage");
        }
        return Ok(());
    };

    if matches!(command, Command::Version) {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION")
                })
            );
        } else {
            println!("taskrank v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let config = Config::discover(cli.config.as_deref()).context("failed to load config")?;
    let clock = match cli.now.as_deref() {
        Some(raw) => FixedClock::new(parse_timestamp("now", raw)?),
        None => FixedClock::at_system_now(),
    };
    let ctx = Context {
        scorer: TaskScorer::with_clock(clock).with_config(config.scoring),
        mode: output_mode,
    };
    log::debug!("scoring weights: {:?}", ctx.scorer.config());

    match command {
        Command::Score { file } => commands::score(&ctx, &file),
        Command::Rank { file } => commands::rank(&ctx, &file),
        Command::Top { file, limit } => commands::top(&ctx, &file, limit),
        Command::Explain { file, id } => commands::explain(&ctx, &file, &id),
        Command::Version => Ok(()),
    }
}
