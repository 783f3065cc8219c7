use std::path::PathBuf;

use of_tui::launch::{self, LaunchOptions};

/// Run the terminal UI in this process.
pub fn run(
    seed: Option<u64>,
    config: Option<PathBuf>,
    statements: Option<PathBuf>,
    log: Option<PathBuf>,
) -> Result<(), String> {
    launch::run(&LaunchOptions {
        seed,
        config,
        statements,
        log,
    })
}
