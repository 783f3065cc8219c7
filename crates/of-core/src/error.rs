//! Error types for the game engine and its configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::category::ResponseCategory;
use crate::outcome::TableKind;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Result type for loading and validating configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A rejected engine operation. Rejections never modify game state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A response was submitted but no statement is awaiting one.
    #[error("no statement is awaiting a response")]
    NoActiveStatement,

    /// The game has ended; only a reset is accepted.
    #[error("the game is over")]
    GameOver,

    /// A turn was requested while the current statement is still unanswered.
    #[error("turn {0} is still awaiting a response")]
    TurnInProgress(u32),

    /// All turns have been played.
    #[error("turn limit of {0} reached")]
    TurnLimitReached(u32),

    /// Player input could not be understood.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),
}

/// A data-integrity problem in the statement pool or the rules.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The statement pool has no statements.
    #[error("statement pool is empty")]
    EmptyPool,

    /// A statement in the pool is malformed.
    #[error("statement {index}: {reason}")]
    InvalidStatement {
        /// Zero-based position in the pool.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// An outcome table has no delta for a category.
    #[error("{table} table has no delta for {category}")]
    MissingDelta {
        /// Which table.
        table: TableKind,
        /// The category without a delta.
        category: ResponseCategory,
    },

    /// An outcome table delta has the wrong sign.
    #[error("{table} delta for {category} must be {expected}, got {value}")]
    InvalidDelta {
        /// Which table.
        table: TableKind,
        /// The offending category.
        category: ResponseCategory,
        /// The configured value.
        value: i32,
        /// Human-readable constraint.
        expected: &'static str,
    },

    /// A numeric rule is out of range.
    #[error("invalid rules: {0}")]
    InvalidRules(String),

    /// The JSON document could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Read a file into a string, attaching the path to any error.
pub(crate) fn read_file(path: &std::path::Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
