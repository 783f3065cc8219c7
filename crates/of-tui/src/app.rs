//! Application state for the terminal frontend.
//!
//! `GameApp` relays key presses into the [`Session`], picks the messages
//! to show, and paces the game through its [`Scheduler`]. Response input is
//! only accepted while a statement is on screen and no transition is
//! pending.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use of_core::narration;
use of_core::{Outcome, Phase, ResponseCategory, Session};

use crate::mood::MoodAnimation;
use crate::pacing::{PacedAction, PacingConfig, Scheduler};

/// Main application state.
pub struct GameApp {
    session: Session,
    pacing: PacingConfig,
    scheduler: Scheduler,
    animation: MoodAnimation,
    /// Text shown in the message box.
    pub message: String,
    /// Whether the player has dismissed the intro.
    pub started: bool,
    /// Whether the end screen is showing.
    pub finished: bool,
    /// Highlighted response button (0-3).
    pub selected: usize,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl GameApp {
    /// Wrap a fresh session.
    pub fn new(session: Session, pacing: PacingConfig) -> Self {
        Self {
            session,
            pacing,
            scheduler: Scheduler::new(),
            animation: MoodAnimation::new(),
            message: intro_message(),
            started: false,
            finished: false,
            selected: 0,
            show_help: false,
            should_quit: false,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The mood animation.
    pub fn animation(&self) -> &MoodAnimation {
        &self.animation
    }

    /// Earliest time the event loop must wake up for.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Whether response buttons accept input.
    pub fn inputs_enabled(&self) -> bool {
        self.started
            && self.session.state().phase() == Phase::AwaitingResponse
            && !self.scheduler.is_pending(PacedAction::Advance)
    }

    /// Whether the loss effect should be drawn.
    pub fn show_victory_effect(&self) -> bool {
        self.finished && self.session.state().outcome() == Outcome::Lost
    }

    /// Dismiss the intro and schedule the first turn.
    pub fn begin(&mut self, now: Instant) {
        if self.started || self.finished {
            return;
        }
        self.started = true;
        self.message = "The meeting begins.".to_string();
        self.scheduler
            .schedule(now, self.pacing.turn_delay, PacedAction::Advance);
    }

    /// Answer the current statement.
    pub fn choose(&mut self, choice: ResponseCategory, now: Instant) {
        if !self.inputs_enabled() {
            debug!(%choice, "input ignored: buttons disabled");
            return;
        }
        match self.session.respond(choice) {
            Ok(resolution) => {
                self.message = narration::resolution_message(&resolution);
                self.animate(narration::mood_after(&resolution), now);
                self.scheduler
                    .schedule(now, self.pacing.turn_delay, PacedAction::Advance);
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    /// Return to the intro screen with a fresh game.
    pub fn restart(&mut self) {
        self.session.reset();
        self.scheduler.clear();
        self.animation = MoodAnimation::new();
        self.message = intro_message();
        self.started = false;
        self.finished = false;
        self.selected = 0;
    }

    /// Run every scheduled action that is due.
    pub fn tick(&mut self, now: Instant) {
        for action in self.scheduler.drain_due(now) {
            match action {
                PacedAction::Advance => self.advance(now),
                PacedAction::AnimationFrame => {
                    if self.animation.advance() {
                        self.scheduler.schedule(
                            now,
                            self.pacing.animation_delay,
                            PacedAction::AnimationFrame,
                        );
                    }
                }
            }
        }
    }

    /// Handle a key press. Returns `true` if the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }
        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') if self.finished => self.restart(),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                if let Some(choice) = ResponseCategory::from_index(index) {
                    self.selected = index;
                    self.choose(choice, now);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.selected &= !1,
            KeyCode::Right | KeyCode::Char('l') => self.selected |= 1,
            KeyCode::Up | KeyCode::Char('k') => self.selected &= !2,
            KeyCode::Down | KeyCode::Char('j') => self.selected |= 2,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.finished {
                    self.restart();
                } else if !self.started {
                    self.begin(now);
                } else if let Some(choice) = ResponseCategory::from_index(self.selected) {
                    self.choose(choice, now);
                }
            }
            _ => {}
        }
        self.should_quit
    }

    /// Handle a left click. `button` is the response button under the
    /// pointer, if any.
    pub fn click(&mut self, button: Option<usize>, now: Instant) {
        if self.show_help {
            self.show_help = false;
        } else if !self.started {
            self.begin(now);
        } else if self.finished {
            if button.is_some() {
                self.restart();
            }
        } else if let Some(choice) = button.and_then(ResponseCategory::from_index) {
            self.selected = choice.index();
            self.choose(choice, now);
        }
    }

    /// Status bar text for the current screen.
    pub fn status_hint(&self) -> &str {
        if self.finished {
            "r/Enter:restart  ?:help  q:quit"
        } else if !self.started {
            "Enter:begin  ?:help  q:quit"
        } else {
            "1-4:answer  \u{2190}\u{2191}\u{2192}\u{2193}:select  Enter:answer  ?:help  q:quit"
        }
    }

    fn advance(&mut self, now: Instant) {
        let outcome = self.session.state().outcome();
        if let Some(end) = narration::end_message(outcome, self.session.rules()) {
            self.finished = true;
            self.message = end;
            self.animate(narration::mood_at_end(outcome), now);
            return;
        }
        match self.session.start_turn() {
            Ok(statement) => {
                self.message = format!("Ojisan: {}", statement.text);
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    fn animate(&mut self, mood: narration::Mood, now: Instant) {
        self.scheduler.cancel(PacedAction::AnimationFrame);
        self.animation.start(mood, self.pacing.animation_frames);
        if self.animation.is_running() {
            self.scheduler
                .schedule(now, self.pacing.animation_delay, PacedAction::AnimationFrame);
        }
    }
}

fn intro_message() -> String {
    format!("{}\n\n[Press Enter to begin]", narration::INTRO)
}
