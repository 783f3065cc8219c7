//! CLI frontend for Otameshi Fighters: Office.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::simulate::Strategy;

#[derive(Parser)]
#[command(
    name = "otameshi",
    about = "Otameshi Fighters: Office, survive the meeting",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a line-based game on stdin/stdout
    Play {
        /// RNG seed for statement draws (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file with game rules
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON file with the statement pool
        #[arg(long)]
        statements: Option<PathBuf>,
    },

    /// Launch the terminal UI
    Tui {
        /// RNG seed for statement draws (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file with game rules
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON file with the statement pool
        #[arg(long)]
        statements: Option<PathBuf>,

        /// Write logs to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },

    /// Print the outcome tables and combo multipliers
    Tables {
        /// JSON file with game rules
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the statement pool
    Statements {
        /// JSON file with the statement pool (default: built-in)
        #[arg(long)]
        statements: Option<PathBuf>,

        /// Print the pool as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate rules and statement files
    Check {
        /// JSON file with game rules
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON file with the statement pool
        #[arg(long)]
        statements: Option<PathBuf>,
    },

    /// Autoplay many games and report the results
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// How the autoplayer answers
        #[arg(long, value_enum, default_value = "random")]
        strategy: Strategy,

        /// JSON file with game rules
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON file with the statement pool
        #[arg(long)]
        statements: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal and logs to a file instead
    if !matches!(cli.command, Commands::Tui { .. }) {
        logging::init();
    }

    let result = match cli.command {
        Commands::Play {
            seed,
            config,
            statements,
        } => commands::play::run(seed, config.as_deref(), statements.as_deref()),
        Commands::Tui {
            seed,
            config,
            statements,
            log,
        } => commands::tui::run(seed, config, statements, log),
        Commands::Tables { config } => commands::tables::run(config.as_deref()),
        Commands::Statements { statements, json } => {
            commands::statements::run(statements.as_deref(), json)
        }
        Commands::Check { config, statements } => {
            commands::check::run(config.as_deref(), statements.as_deref())
        }
        Commands::Simulate {
            games,
            seed,
            strategy,
            config,
            statements,
        } => commands::simulate::run(
            games,
            seed,
            strategy,
            config.as_deref(),
            statements.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
