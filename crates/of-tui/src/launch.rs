//! Building and running the terminal UI from command-line options.

use std::path::PathBuf;

use tracing::info;

use of_core::{ContentTable, GameRules, RandomPicker, Session};

use crate::app::GameApp;
use crate::pacing::PacingConfig;
use crate::{logging, terminal};

/// Options shared by the `of-tui` binary and `otameshi tui`.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// RNG seed; drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Game rules JSON file.
    pub config: Option<PathBuf>,
    /// Statement pool JSON file.
    pub statements: Option<PathBuf>,
    /// Log file.
    pub log: Option<PathBuf>,
}

/// Load the rules and pool and wrap them in a fresh app.
pub fn build_app(options: &LaunchOptions) -> Result<GameApp, String> {
    let rules = GameRules::load_or_default(options.config.as_deref()).map_err(|e| e.to_string())?;
    let content =
        ContentTable::load_or_builtin(options.statements.as_deref()).map_err(|e| e.to_string())?;
    let session = Session::new(rules, content, Box::new(RandomPicker::new(options.seed)))
        .map_err(|e| e.to_string())?;
    Ok(GameApp::new(session, PacingConfig::default()))
}

/// Set up logging, build the app, and run it until the player quits.
pub fn run(options: &LaunchOptions) -> Result<(), String> {
    if let Some(path) = &options.log {
        logging::init_file(path)?;
    }
    let app = build_app(options)?;
    info!(seed = ?options.seed, statements = app.session().content().len(), "starting terminal UI");
    terminal::run(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_pool() {
        let app = build_app(&LaunchOptions::default()).unwrap();
        assert_eq!(app.session().content().len(), 15);
        assert_eq!(app.session().rules(), &GameRules::default());
    }

    #[test]
    fn bad_config_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, r#"{"max_turns": 0}"#).unwrap();
        let options = LaunchOptions {
            config: Some(path),
            ..LaunchOptions::default()
        };
        let err = build_app(&options).err().unwrap();
        assert!(err.contains("max_turns"), "{err}");
    }
}
