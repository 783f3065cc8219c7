//! Standalone TUI binary for Otameshi Fighters: Office.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use of_tui::launch::{self, LaunchOptions};

#[derive(Parser)]
#[command(
    name = "of-tui",
    about = "Terminal UI for Otameshi Fighters: Office",
    version
)]
struct Args {
    /// RNG seed for statement draws (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with game rules
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with the statement pool
    #[arg(long)]
    statements: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let options = LaunchOptions {
        seed: args.seed,
        config: args.config,
        statements: args.statements,
        log: args.log,
    };

    if let Err(e) = launch::run(&options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
