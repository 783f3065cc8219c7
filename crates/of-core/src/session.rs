//! A single player's game session.
//!
//! `Session` owns the state together with the tables, rules, and statement
//! picker, applies engine transitions in place, and keeps a per-turn
//! history. It also interprets text commands for line-based frontends.

use serde::Serialize;

use crate::category::ResponseCategory;
use crate::config::GameRules;
use crate::content::{ContentTable, Statement};
use crate::engine::{self, Resolution};
use crate::error::{ConfigResult, EngineError, EngineResult};
use crate::narration;
use crate::picker::{RandomPicker, StatementPicker};
use crate::state::{GameState, Phase};

/// One resolved turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    /// Turn number (1-based).
    pub turn: u32,
    /// What the ojisan said.
    pub statement: String,
    /// Engine output for the answer.
    pub resolution: Resolution,
}

/// An interactive game session.
pub struct Session {
    rules: GameRules,
    content: ContentTable,
    picker: Box<dyn StatementPicker>,
    state: GameState,
    history: Vec<TurnRecord>,
}

impl Session {
    /// Create a session. The rules are validated first.
    pub fn new(
        rules: GameRules,
        content: ContentTable,
        picker: Box<dyn StatementPicker>,
    ) -> ConfigResult<Self> {
        rules.validate()?;
        Ok(Self {
            rules,
            content,
            picker,
            state: GameState::new(),
            history: Vec::new(),
        })
    }

    /// Create a session drawing statements from a seeded RNG.
    pub fn seeded(rules: GameRules, content: ContentTable, seed: u64) -> ConfigResult<Self> {
        Self::new(rules, content, Box::new(RandomPicker::seeded(seed)))
    }

    /// Current state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The session rules.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// The statement pool.
    pub fn content(&self) -> &ContentTable {
        &self.content
    }

    /// Turns resolved since the last reset.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Start the next turn and return the drawn statement.
    pub fn start_turn(&mut self) -> EngineResult<&Statement> {
        self.state = engine::start_turn(
            &self.state,
            &self.rules,
            &self.content,
            self.picker.as_mut(),
        )?;
        self.state
            .current_statement()
            .ok_or(EngineError::NoActiveStatement)
    }

    /// Answer the current statement.
    pub fn respond(&mut self, choice: ResponseCategory) -> EngineResult<Resolution> {
        let statement = self
            .state
            .current_statement()
            .map(|s| s.text.clone())
            .unwrap_or_default();
        let (next, resolution) = engine::resolve_response(&self.state, &self.rules, choice)?;
        self.history.push(TurnRecord {
            turn: next.turn(),
            statement,
            resolution,
        });
        self.state = next;
        Ok(resolution)
    }

    /// Discard the current game and start from scratch.
    pub fn reset(&mut self) {
        self.state = engine::reset();
        self.history.clear();
    }

    /// Process one line of player input and return the text to show.
    ///
    /// Answering a statement immediately starts the next turn unless the
    /// game has ended.
    pub fn process(&mut self, input: &str) -> EngineResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        if let Some(choice) = ResponseCategory::parse(trimmed) {
            return self.do_respond(choice);
        }

        match trimmed.to_lowercase().as_str() {
            "start" | "begin" => self.do_start(),
            "status" => Ok(narration::status_line(&self.state, &self.rules)),
            "history" => Ok(self.do_history()),
            "restart" | "reset" => {
                self.reset();
                self.do_start()
            }
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(EngineError::InvalidChoice(format!(
                "'{other}' (type 1-4, a category name, or 'help')"
            ))),
        }
    }

    fn do_start(&mut self) -> EngineResult<String> {
        self.start_turn()?;
        Ok(self.render_turn())
    }

    fn do_respond(&mut self, choice: ResponseCategory) -> EngineResult<String> {
        let resolution = self.respond(choice)?;
        let mut out = narration::resolution_message(&resolution);
        out.push('\n');
        out.push_str(&narration::status_line(&self.state, &self.rules));

        if let Some(end) = narration::end_message(self.state.outcome(), &self.rules) {
            out.push_str(&format!("\n\n{end}\nType 'restart' to play again."));
        } else if self.state.phase() == Phase::AwaitingTurnStart {
            self.start_turn()?;
            out.push_str("\n\n");
            out.push_str(&self.render_turn());
        }
        Ok(out)
    }

    fn do_history(&self) -> String {
        if self.history.is_empty() {
            return "No turns played yet.".to_string();
        }
        let mut out = String::new();
        for record in &self.history {
            let r = &record.resolution;
            let verdict = if r.correct { "ok  " } else { "miss" };
            let category = r.category.to_string();
            out.push_str(&format!(
                "  {:>2}. {verdict} {category:<10} {:+4} -> {:>3}  {}\n",
                record.turn,
                r.applied_delta,
                r.stress,
                record.statement
            ));
        }
        out.trim_end().to_string()
    }

    fn render_turn(&self) -> String {
        let mut out = narration::status_line(&self.state, &self.rules);
        if let Some(prompt) = narration::prompt(&self.state) {
            out.push('\n');
            out.push_str(&prompt);
        }
        out
    }
}

const HELP: &str = "\
Commands:
  1 / deflect     Let it slide
  2 / counter     Correct the logic
  3 / empathize   Show understanding
  4 / question    Answer with a question
  status          Show turn and stress
  history         List resolved turns
  restart         Start a new game
  quit            Exit";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StatementKind;
    use crate::picker::ScriptedPicker;
    use crate::state::Outcome;

    fn single(correct: ResponseCategory) -> ContentTable {
        ContentTable::new(vec![Statement::new(
            "Who decided that?",
            correct,
            StatementKind::Doubt,
            ["slide", "counter", "empathize", "ask"],
        )])
        .unwrap()
    }

    fn session(correct: ResponseCategory) -> Session {
        Session::new(
            GameRules::default(),
            single(correct),
            Box::new(ScriptedPicker::constant(0)),
        )
        .unwrap()
    }

    #[test]
    fn new_session_is_fresh() {
        let s = session(ResponseCategory::Question);
        assert_eq!(s.state(), &GameState::new());
        assert!(s.history().is_empty());
    }

    #[test]
    fn invalid_rules_rejected() {
        let result = Session::seeded(
            GameRules::default().with_max_turns(0),
            ContentTable::builtin(),
            1,
        );
        assert!(result.is_err());
    }

    #[test]
    fn respond_records_history() {
        let mut s = session(ResponseCategory::Question);
        s.start_turn().unwrap();
        let r = s.respond(ResponseCategory::Deflect).unwrap();
        assert_eq!(r.stress, 20);
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history()[0].turn, 1);
        assert_eq!(s.history()[0].statement, "Who decided that?");
    }

    #[test]
    fn respond_without_turn_rejected() {
        let mut s = session(ResponseCategory::Question);
        assert_eq!(
            s.respond(ResponseCategory::Deflect).unwrap_err(),
            EngineError::NoActiveStatement
        );
        assert!(s.history().is_empty());
        assert_eq!(s.state(), &GameState::new());
    }

    #[test]
    fn process_start_shows_prompt() {
        let mut s = session(ResponseCategory::Question);
        let out = s.process("start").unwrap();
        assert!(out.contains("Turn 1/10"));
        assert!(out.contains("Ojisan: Who decided that?"));
        assert!(out.contains("4) ask"));
    }

    #[test]
    fn process_answer_advances_to_next_turn() {
        let mut s = session(ResponseCategory::Question);
        s.process("start").unwrap();
        let out = s.process("4").unwrap();
        assert!(out.starts_with("The room settled down!"));
        assert!(out.contains("Turn 2/10"));
        assert_eq!(s.state().turn(), 2);
    }

    #[test]
    fn process_combo_message() {
        let mut s = session(ResponseCategory::Question);
        s.process("start").unwrap();
        s.process("deflect").unwrap();
        let out = s.process("counter").unwrap();
        assert!(out.contains("[2 failures in a row! x2 damage]"));
        assert_eq!(s.state().stress(), 50);
    }

    #[test]
    fn process_full_win() {
        let mut s = session(ResponseCategory::Empathize);
        s.process("start").unwrap();
        let mut last = String::new();
        for _ in 0..10 {
            last = s.process("3").unwrap();
        }
        assert!(last.contains("WIN!"));
        assert_eq!(s.state().outcome(), Outcome::Won);
        assert_eq!(
            s.process("3").unwrap_err(),
            EngineError::GameOver
        );
    }

    #[test]
    fn process_loss_and_restart() {
        let mut s = session(ResponseCategory::Question);
        s.process("start").unwrap();
        s.process("1").unwrap(); // 20
        s.process("1").unwrap(); // +40 = 60
        let out = s.process("1").unwrap(); // +80 -> 100
        assert!(out.contains("LOSE..."));
        assert_eq!(s.state().outcome(), Outcome::Lost);

        let out = s.process("restart").unwrap();
        assert!(out.contains("Turn 1/10"));
        assert_eq!(s.state().stress(), 0);
        assert!(s.history().is_empty());
    }

    #[test]
    fn process_history_and_status() {
        let mut s = session(ResponseCategory::Question);
        assert_eq!(s.process("history").unwrap(), "No turns played yet.");
        s.process("start").unwrap();
        s.process("2").unwrap();
        let history = s.process("history").unwrap();
        assert!(history.contains("miss"));
        assert!(history.contains("Counter"));
        assert!(s.process("status").unwrap().contains("Stress 15%"));
    }

    #[test]
    fn process_start_twice_rejected() {
        let mut s = session(ResponseCategory::Question);
        s.process("start").unwrap();
        assert_eq!(
            s.process("start").unwrap_err(),
            EngineError::TurnInProgress(1)
        );
    }

    #[test]
    fn process_unknown_and_empty() {
        let mut s = session(ResponseCategory::Question);
        assert!(s.process("").unwrap().is_empty());
        assert!(matches!(
            s.process("shout"),
            Err(EngineError::InvalidChoice(_))
        ));
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
    }

    #[test]
    fn seeded_sessions_draw_identically() {
        let mut a = Session::seeded(GameRules::default(), ContentTable::builtin(), 9).unwrap();
        let mut b = Session::seeded(GameRules::default(), ContentTable::builtin(), 9).unwrap();
        for _ in 0..5 {
            let ta = a.start_turn().unwrap().text.clone();
            let tb = b.start_turn().unwrap().text.clone();
            assert_eq!(ta, tb);
            a.respond(ResponseCategory::Question).unwrap();
            b.respond(ResponseCategory::Question).unwrap();
            if a.state().is_terminal() {
                break;
            }
        }
    }
}
