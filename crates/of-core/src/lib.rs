//! Turn and combo resolution engine for Otameshi Fighters: Office.
//!
//! Each turn the ojisan makes a provoking statement and the player answers
//! with one of four response categories. Correct answers calm the stress
//! meter, wrong ones raise it, and consecutive mistakes escalate the
//! penalty. The game is won by surviving the turn limit below the stress
//! ceiling.
//!
//! The engine itself is a set of pure transitions over [`GameState`]
//! (see [`engine`]); [`Session`] bundles state, tables, and randomness for
//! presentation adapters.

pub mod category;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod narration;
pub mod outcome;
pub mod picker;
pub mod session;
pub mod state;

pub use category::ResponseCategory;
pub use config::GameRules;
pub use content::{ContentTable, Statement, StatementKind};
pub use engine::{Resolution, check_termination, reset, resolve_response, start_turn};
pub use error::{ConfigError, ConfigResult, EngineError, EngineResult};
pub use outcome::{DeltaTable, OutcomeTables, TableKind};
pub use picker::{RandomPicker, ScriptedPicker, StatementPicker};
pub use session::{Session, TurnRecord};
pub use state::{GameState, Outcome, Phase};
