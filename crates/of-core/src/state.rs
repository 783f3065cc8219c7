//! Authoritative game state.

use serde::Serialize;

use crate::content::Statement;

/// How the game ended, if it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Outcome {
    /// Still in play.
    #[default]
    Undecided,
    /// Survived every turn below the stress ceiling.
    Won,
    /// Stress reached the ceiling.
    Lost,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undecided => write!(f, "undecided"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Where the turn state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next turn to be started.
    AwaitingTurnStart,
    /// A statement is on the table.
    AwaitingResponse,
    /// The game has ended.
    Terminal,
}

/// A snapshot of the game. Replaced, never edited, by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameState {
    pub(crate) stress: u32,
    pub(crate) turn: u32,
    pub(crate) outcome: Outcome,
    pub(crate) current: Option<Statement>,
    pub(crate) consecutive_failures: u32,
}

impl GameState {
    /// A fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stress level.
    pub fn stress(&self) -> u32 {
        self.stress
    }

    /// Number of turns started so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Game result.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::Undecided
    }

    /// The statement awaiting a response.
    pub fn current_statement(&self) -> Option<&Statement> {
        self.current.as_ref()
    }

    /// Incorrect responses in a row.
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    /// Current state machine phase.
    pub fn phase(&self) -> Phase {
        if self.is_terminal() {
            Phase::Terminal
        } else if self.current.is_some() {
            Phase::AwaitingResponse
        } else {
            Phase::AwaitingTurnStart
        }
    }

    /// Stress as a whole percentage of `ceiling`.
    pub fn stress_percent(&self, ceiling: u32) -> u32 {
        if ceiling == 0 {
            return 100;
        }
        (u64::from(self.stress) * 100 / u64::from(ceiling)).min(100) as u32
    }
}
