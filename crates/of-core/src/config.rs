//! Fixed rules for a game session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, read_file};
use crate::outcome::{OutcomeTables, RawTables};

/// Rules that stay constant for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRules {
    /// Turns the player must survive to win.
    pub max_turns: u32,
    /// Stress level at which the player loses.
    pub stress_ceiling: u32,
    /// Largest combo multiplier applied to a failure penalty.
    pub multiplier_cap: u32,
    /// Success and failure deltas.
    pub tables: OutcomeTables,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_turns: 10,
            stress_ceiling: 100,
            multiplier_cap: 64,
            tables: OutcomeTables::default(),
        }
    }
}

impl GameRules {
    /// Set the number of turns.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set the stress ceiling.
    pub fn with_stress_ceiling(mut self, ceiling: u32) -> Self {
        self.stress_ceiling = ceiling;
        self
    }

    /// Set the combo multiplier cap (at least 1).
    pub fn with_multiplier_cap(mut self, cap: u32) -> Self {
        self.multiplier_cap = cap.max(1);
        self
    }

    /// Replace the outcome tables.
    pub fn with_tables(mut self, tables: OutcomeTables) -> Self {
        self.tables = tables;
        self
    }

    /// Check every rule and both tables.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_turns == 0 {
            return Err(ConfigError::InvalidRules(
                "max_turns must be at least 1".to_string(),
            ));
        }
        if self.stress_ceiling == 0 {
            return Err(ConfigError::InvalidRules(
                "stress_ceiling must be at least 1".to_string(),
            ));
        }
        if self.multiplier_cap == 0 {
            return Err(ConfigError::InvalidRules(
                "multiplier_cap must be at least 1".to_string(),
            ));
        }
        self.tables.validate()
    }

    /// Parse and validate rules from JSON. Missing fields take defaults.
    ///
    /// Tables are converted after parsing so a missing category surfaces as
    /// [`ConfigError::MissingDelta`] rather than a parse error.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let raw: RawRules = serde_json::from_str(json)?;
        let rules = Self::try_from(raw)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load and validate a JSON rules file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let rules = Self::from_json(&read_file(path)?)?;
        tracing::debug!(path = %path.display(), ?rules, "rules loaded");
        Ok(rules)
    }

    /// Load `path` if given, otherwise the default rules.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

/// JSON form of [`GameRules`]. Every field is optional.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawRules {
    max_turns: u32,
    stress_ceiling: u32,
    multiplier_cap: u32,
    tables: RawTables,
}

impl Default for RawRules {
    fn default() -> Self {
        let rules = GameRules::default();
        Self {
            max_turns: rules.max_turns,
            stress_ceiling: rules.stress_ceiling,
            multiplier_cap: rules.multiplier_cap,
            tables: rules.tables.into(),
        }
    }
}

impl TryFrom<RawRules> for GameRules {
    type Error = ConfigError;

    fn try_from(raw: RawRules) -> ConfigResult<Self> {
        Ok(Self {
            max_turns: raw.max_turns,
            stress_ceiling: raw.stress_ceiling,
            multiplier_cap: raw.multiplier_cap,
            tables: OutcomeTables::try_from(raw.tables)?,
        })
    }
}
