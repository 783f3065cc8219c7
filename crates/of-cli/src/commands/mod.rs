pub mod check;
pub mod play;
pub mod simulate;
pub mod statements;
pub mod tables;
pub mod tui;

use std::path::Path;

use of_core::{ContentTable, GameRules};

/// Load the rules file, or the defaults when none is given.
fn load_rules(path: Option<&Path>) -> Result<GameRules, String> {
    GameRules::load_or_default(path).map_err(|e| e.to_string())
}

/// Load the statement file, or the built-in pool when none is given.
fn load_content(path: Option<&Path>) -> Result<ContentTable, String> {
    ContentTable::load_or_builtin(path).map_err(|e| e.to_string())
}
