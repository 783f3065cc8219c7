//! Log setup for the terminal UI.
//!
//! The screen owns stdout and stderr, so events go to a file or nowhere.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Send tracing events to `path`, filtered by `RUST_LOG` (default `info`).
pub fn init_file(path: &Path) -> Result<(), String> {
    let file = File::create(path)
        .map_err(|e| format!("cannot create log file {}: {e}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .map_err(|e| format!("logging already initialised: {e}"))
}
