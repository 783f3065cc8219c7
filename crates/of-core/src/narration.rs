//! Player-facing text and moods derived from engine output.
//!
//! Nothing here affects game state; adapters call these helpers to turn a
//! [`Resolution`] or [`GameState`] into words.

use crate::category::ResponseCategory;
use crate::config::GameRules;
use crate::engine::Resolution;
use crate::state::{GameState, Outcome};

/// Shown before the first turn.
pub const INTRO: &str = "\
The meeting is about to begin...

You are an office worker sitting in on a meeting.
Across the table sits an \"otameshi ojisan\", a colleague
who tests people with remarks he doesn't even notice making.

He will grind down your nerves, one remark at a time.
Can you make it to the end of the meeting?

...Ready?";

/// Message for a correct answer in `category`.
pub fn success_message(category: ResponseCategory) -> &'static str {
    match category {
        ResponseCategory::Deflect => "Smoothly handled!",
        ResponseCategory::Counter => "An effective comeback!",
        ResponseCategory::Empathize => "The ojisan went quiet...",
        ResponseCategory::Question => "The room settled down!",
    }
}

/// Message for a wrong answer in `category`.
pub fn failure_message(category: ResponseCategory) -> &'static str {
    match category {
        ResponseCategory::Deflect => "He's getting into it...",
        ResponseCategory::Counter => "Logic didn't land, and he's heating up...",
        ResponseCategory::Empathize => "The sympathy backfired...",
        ResponseCategory::Question => "The question added fuel to the fire...",
    }
}

/// Combo annotation, if a multiplier above 1 was applied.
pub fn combo_annotation(resolution: &Resolution) -> Option<String> {
    resolution.is_combo().then(|| {
        format!(
            "[{} failures in a row! x{} damage]",
            resolution.streak, resolution.multiplier
        )
    })
}

/// Full message for a resolution, including any combo annotation.
pub fn resolution_message(resolution: &Resolution) -> String {
    if resolution.correct {
        return success_message(resolution.category).to_string();
    }
    let mut msg = failure_message(resolution.category).to_string();
    if let Some(combo) = combo_annotation(resolution) {
        msg.push('\n');
        msg.push_str(&combo);
    }
    msg
}

/// End-of-game message, if the game has ended.
pub fn end_message(outcome: Outcome, rules: &GameRules) -> Option<String> {
    match outcome {
        Outcome::Undecided => None,
        Outcome::Won => Some(format!(
            "WIN! You held the ojisan off for {} turns!",
            rules.max_turns
        )),
        Outcome::Lost => Some("LOSE... Exhausted!".to_string()),
    }
}

/// Stress band label, one per 20% of the ceiling.
pub fn status_label(percent: u32) -> &'static str {
    match percent {
        100.. => "[Can't take any more...]",
        80..=99 => "[On the verge!]",
        60..=79 => "[Really rough]",
        40..=59 => "[Getting hard]",
        20..=39 => "[A little tired]",
        _ => "[Still composed]",
    }
}

/// One-line status: turn counter, stress percentage, band label.
pub fn status_line(state: &GameState, rules: &GameRules) -> String {
    let percent = state.stress_percent(rules.stress_ceiling);
    format!(
        "Turn {}/{} | Stress {}% {}",
        state.turn(),
        rules.max_turns,
        percent,
        status_label(percent)
    )
}

/// The current statement and numbered answer captions.
pub fn prompt(state: &GameState) -> Option<String> {
    let statement = state.current_statement()?;
    let mut out = format!("Ojisan: {}\n", statement.text);
    for category in ResponseCategory::ALL {
        out.push_str(&format!(
            "  {}) {}\n",
            category.index() + 1,
            statement.response(category)
        ));
    }
    Some(out.trim_end().to_string())
}

/// The ojisan's facial expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    /// Resting face.
    #[default]
    Neutral,
    /// Irritated.
    Angry,
    /// Pleased with himself.
    Happy,
}

/// How the ojisan reacts to a response.
///
/// A failed deflection encourages him; any other mistake annoys him.
pub fn mood_after(resolution: &Resolution) -> Mood {
    if resolution.correct {
        Mood::Neutral
    } else if resolution.category == ResponseCategory::Deflect {
        Mood::Happy
    } else {
        Mood::Angry
    }
}

/// How the ojisan reacts when the game ends.
pub fn mood_at_end(outcome: Outcome) -> Mood {
    match outcome {
        Outcome::Won => Mood::Happy,
        Outcome::Lost => Mood::Angry,
        Outcome::Undecided => Mood::Neutral,
    }
}
