//! The four response categories a player can answer with.

use serde::{Deserialize, Serialize};

/// How the player answers a statement.
///
/// Declaration order matches the on-screen button order (1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    /// Let the remark slide without engaging.
    Deflect,
    /// Correct the logic with facts.
    Counter,
    /// Show understanding and soften the mood.
    Empathize,
    /// Answer with a question and take the initiative.
    Question,
}

impl ResponseCategory {
    /// All categories in button order.
    pub const ALL: [ResponseCategory; 4] = [
        ResponseCategory::Deflect,
        ResponseCategory::Counter,
        ResponseCategory::Empathize,
        ResponseCategory::Question,
    ];

    /// Zero-based button index.
    pub fn index(self) -> usize {
        match self {
            Self::Deflect => 0,
            Self::Counter => 1,
            Self::Empathize => 2,
            Self::Question => 3,
        }
    }

    /// Category for a zero-based button index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a category from its name or its 1-based button number.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "deflect" | "slide" => Some(Self::Deflect),
            "2" | "counter" | "logic" => Some(Self::Counter),
            "3" | "empathize" | "empathise" => Some(Self::Empathize),
            "4" | "question" | "ask" => Some(Self::Question),
            _ => None,
        }
    }

    /// Button caption used when no statement is on screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Deflect => "Let it slide",
            Self::Counter => "Correct the logic",
            Self::Empathize => "Empathize",
            Self::Question => "Ask back",
        }
    }
}

impl std::fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deflect => write!(f, "Deflect"),
            Self::Counter => write!(f, "Counter"),
            Self::Empathize => write!(f, "Empathize"),
            Self::Question => write!(f, "Question"),
        }
    }
}
