//! The statement pool the ojisan draws from.

mod pool;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::ResponseCategory;
use crate::error::{ConfigError, ConfigResult, read_file};
use crate::picker::StatementPicker;

/// Flavour of a statement. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    /// Casting doubt on the player's work.
    Doubt,
    /// Feigned worry.
    Concern,
    /// "There must be a better way."
    Suggestion,
    /// Self-promotion.
    Ego,
    /// Non-committal disengagement.
    Passive,
    /// War stories.
    Story,
    /// Brushing the player off.
    Dismissive,
    /// Talking down to the player.
    Patronizing,
    /// Anything else.
    #[default]
    Other,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Doubt => "doubt",
            Self::Concern => "concern",
            Self::Suggestion => "suggestion",
            Self::Ego => "ego",
            Self::Passive => "passive",
            Self::Story => "story",
            Self::Dismissive => "dismissive",
            Self::Patronizing => "patronizing",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A provoking remark and the four ways to answer it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// What the ojisan says.
    pub text: String,
    /// The category that defuses it.
    pub correct: ResponseCategory,
    /// Flavour tag.
    #[serde(default)]
    pub kind: StatementKind,
    /// Button captions, one per category in button order.
    pub responses: [String; 4],
}

impl Statement {
    /// Create a statement.
    pub fn new(
        text: impl Into<String>,
        correct: ResponseCategory,
        kind: StatementKind,
        responses: [&str; 4],
    ) -> Self {
        Self {
            text: text.into(),
            correct,
            kind,
            responses: responses.map(String::from),
        }
    }

    /// Caption of the button for `category`.
    pub fn response(&self, category: ResponseCategory) -> &str {
        &self.responses[category.index()]
    }

    fn check(&self, index: usize) -> ConfigResult<()> {
        if self.text.trim().is_empty() {
            return Err(ConfigError::InvalidStatement {
                index,
                reason: "text is empty".to_string(),
            });
        }
        if let Some(category) = ResponseCategory::ALL
            .iter()
            .find(|c| self.response(**c).trim().is_empty())
        {
            return Err(ConfigError::InvalidStatement {
                index,
                reason: format!("response for {category} is empty"),
            });
        }
        Ok(())
    }
}

/// A validated, non-empty pool of statements.
#[derive(Debug, Clone)]
pub struct ContentTable {
    statements: Vec<Statement>,
}

impl ContentTable {
    /// Validate and wrap a list of statements.
    pub fn new(statements: Vec<Statement>) -> ConfigResult<Self> {
        if statements.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        for (i, s) in statements.iter().enumerate() {
            s.check(i)?;
        }
        Ok(Self { statements })
    }

    /// The pool shipped with the game.
    pub fn builtin() -> Self {
        Self {
            statements: pool::builtin_statements(),
        }
    }

    /// Parse a JSON array of statements.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let statements: Vec<Statement> = serde_json::from_str(json)?;
        Self::new(statements)
    }

    /// Load a JSON statement file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let table = Self::from_json(&read_file(path)?)?;
        tracing::debug!(path = %path.display(), statements = table.len(), "statement pool loaded");
        Ok(table)
    }

    /// Load `path` if given, otherwise the built-in pool.
    pub fn load_or_builtin(path: Option<&Path>) -> ConfigResult<Self> {
        path.map_or_else(|| Ok(Self::builtin()), Self::load)
    }

    /// All statements in pool order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Always false for a constructed table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Draw a statement with replacement.
    ///
    /// Out-of-range picks wrap around the pool.
    pub fn pick(&self, picker: &mut dyn StatementPicker) -> &Statement {
        let index = picker.pick_index(self.statements.len()) % self.statements.len();
        &self.statements[index]
    }

    /// Categories that are never the correct answer in this pool.
    pub fn categories_missing(&self) -> Vec<ResponseCategory> {
        ResponseCategory::ALL
            .into_iter()
            .filter(|c| !self.statements.iter().any(|s| s.correct == *c))
            .collect()
    }

    /// Whether every category is the correct answer somewhere in the pool.
    pub fn covers_all_categories(&self) -> bool {
        self.categories_missing().is_empty()
    }
}

impl Default for ContentTable {
    fn default() -> Self {
        Self::builtin()
    }
}
