//! Turn and combo resolution.
//!
//! Transitions are pure: each takes the current [`GameState`] by reference
//! and returns the next one, leaving the input untouched. A rejected
//! operation returns an [`EngineError`] and no new state.
//!
//! ```text
//! AwaitingTurnStart --start_turn--> AwaitingResponse
//! AwaitingResponse --resolve_response--> AwaitingTurnStart | Terminal
//! any --reset--> AwaitingTurnStart
//! ```

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::category::ResponseCategory;
use crate::config::GameRules;
use crate::content::ContentTable;
use crate::error::{EngineError, EngineResult};
use crate::picker::StatementPicker;
use crate::state::{GameState, Outcome};

/// What happened when a response was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Whether the chosen category was the correct one.
    pub correct: bool,
    /// The category the player chose.
    pub category: ResponseCategory,
    /// The category that would have been correct.
    pub expected: ResponseCategory,
    /// Table delta before combo scaling.
    pub base_delta: i32,
    /// Combo multiplier applied (1 when there is no combo).
    pub multiplier: u32,
    /// `base_delta * multiplier`, before clamping.
    pub applied_delta: i32,
    /// Consecutive failures after this response.
    pub streak: u32,
    /// Stress level after clamping.
    pub stress: u32,
    /// Game result after this response.
    pub outcome: Outcome,
}

impl Resolution {
    /// Whether a combo multiplier above 1 was applied.
    pub fn is_combo(&self) -> bool {
        self.multiplier > 1
    }
}

/// Start the next turn by drawing a statement.
pub fn start_turn(
    state: &GameState,
    rules: &GameRules,
    content: &ContentTable,
    picker: &mut dyn StatementPicker,
) -> EngineResult<GameState> {
    if state.is_terminal() {
        warn!("start_turn rejected: game over");
        return Err(EngineError::GameOver);
    }
    if state.current.is_some() {
        warn!(turn = state.turn, "start_turn rejected: response pending");
        return Err(EngineError::TurnInProgress(state.turn));
    }
    if state.turn >= rules.max_turns {
        warn!(turn = state.turn, "start_turn rejected: turn limit");
        return Err(EngineError::TurnLimitReached(rules.max_turns));
    }

    let statement = content.pick(picker).clone();
    debug!(turn = state.turn + 1, correct = %statement.correct, "turn started");

    Ok(GameState {
        turn: state.turn + 1,
        current: Some(statement),
        ..state.clone()
    })
}

/// Resolve the player's answer to the current statement.
pub fn resolve_response(
    state: &GameState,
    rules: &GameRules,
    choice: ResponseCategory,
) -> EngineResult<(GameState, Resolution)> {
    if state.is_terminal() {
        warn!(%choice, "resolve_response rejected: game over");
        return Err(EngineError::GameOver);
    }
    let Some(statement) = state.current.as_ref() else {
        warn!(%choice, "resolve_response rejected: no active statement");
        return Err(EngineError::NoActiveStatement);
    };

    let correct = choice == statement.correct;
    let base_delta = rules.tables.delta(choice, correct);
    let (streak, multiplier) = if correct {
        (0, 1)
    } else {
        let streak = state.consecutive_failures.saturating_add(1);
        (streak, combo_multiplier(streak, rules.multiplier_cap))
    };
    let applied_delta = base_delta.saturating_mul(i32::try_from(multiplier).unwrap_or(i32::MAX));
    let stress = apply_delta(state.stress, applied_delta, rules.stress_ceiling);

    let mut next = GameState {
        stress,
        turn: state.turn,
        outcome: Outcome::Undecided,
        current: None,
        consecutive_failures: streak,
    };
    next.outcome = check_termination(&next, rules);

    debug!(
        turn = next.turn,
        %choice,
        expected = %statement.correct,
        correct,
        base_delta,
        multiplier,
        stress,
        "response resolved"
    );
    if next.is_terminal() {
        info!(turn = next.turn, stress, outcome = %next.outcome, "game over");
    }

    let resolution = Resolution {
        correct,
        category: choice,
        expected: statement.correct,
        base_delta,
        multiplier,
        applied_delta,
        streak,
        stress,
        outcome: next.outcome,
    };
    Ok((next, resolution))
}

/// Decide whether the game has ended.
///
/// Hitting the stress ceiling loses even on the final turn.
pub fn check_termination(state: &GameState, rules: &GameRules) -> Outcome {
    if state.stress >= rules.stress_ceiling {
        Outcome::Lost
    } else if state.turn >= rules.max_turns {
        Outcome::Won
    } else {
        Outcome::Undecided
    }
}

/// A fresh game, regardless of what came before.
pub fn reset() -> GameState {
    debug!("game reset");
    GameState::default()
}

/// Multiplier for the `streak`-th consecutive failure: `2^(streak-1)` from
/// the second failure on, never above `cap`.
pub fn combo_multiplier(streak: u32, cap: u32) -> u32 {
    if streak < 2 {
        return 1;
    }
    2u32.checked_pow(streak - 1)
        .unwrap_or(u32::MAX)
        .min(cap.max(1))
}

fn apply_delta(stress: u32, delta: i32, ceiling: u32) -> u32 {
    let raw = i64::from(stress) + i64::from(delta);
    raw.clamp(0, i64::from(ceiling)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Statement, StatementKind};
    use crate::picker::ScriptedPicker;
    use crate::state::Phase;
    use proptest::prelude::*;

    /// One statement per category, in button order.
    fn table() -> ContentTable {
        let statements = ResponseCategory::ALL
            .iter()
            .map(|c| Statement::new(format!("say {c}"), *c, StatementKind::Other, ["a", "b", "c", "d"]))
            .collect();
        ContentTable::new(statements).unwrap()
    }

    /// Start a turn whose correct answer is `correct`.
    fn turn_expecting(state: &GameState, correct: ResponseCategory) -> GameState {
        let mut picker = ScriptedPicker::constant(correct.index());
        start_turn(state, &GameRules::default(), &table(), &mut picker).unwrap()
    }

    /// Start a turn and answer it.
    fn play(
        state: &GameState,
        correct: ResponseCategory,
        choice: ResponseCategory,
    ) -> (GameState, Resolution) {
        let pending = turn_expecting(state, correct);
        resolve_response(&pending, &GameRules::default(), choice).unwrap()
    }

    #[test]
    fn start_turn_draws_and_advances() {
        let s = turn_expecting(&GameState::new(), ResponseCategory::Counter);
        assert_eq!(s.turn(), 1);
        assert_eq!(s.phase(), Phase::AwaitingResponse);
        assert_eq!(s.current_statement().unwrap().correct, ResponseCategory::Counter);
    }

    #[test]
    fn start_turn_rejected_while_pending() {
        let s = turn_expecting(&GameState::new(), ResponseCategory::Counter);
        let mut picker = ScriptedPicker::constant(0);
        let err = start_turn(&s, &GameRules::default(), &table(), &mut picker).unwrap_err();
        assert_eq!(err, EngineError::TurnInProgress(1));
    }

    #[test]
    fn start_turn_rejected_when_terminal() {
        let s = GameState {
            outcome: Outcome::Won,
            turn: 10,
            ..GameState::default()
        };
        let mut picker = ScriptedPicker::constant(0);
        let err = start_turn(&s, &GameRules::default(), &table(), &mut picker).unwrap_err();
        assert_eq!(err, EngineError::GameOver);
    }

    #[test]
    fn first_incorrect_deflect_adds_base_penalty() {
        let (s, r) = play(
            &GameState::new(),
            ResponseCategory::Question,
            ResponseCategory::Deflect,
        );
        assert!(!r.correct);
        assert_eq!(r.base_delta, 20);
        assert_eq!(r.multiplier, 1);
        assert!(!r.is_combo());
        assert_eq!(s.stress(), 20);
        assert_eq!(s.consecutive_failures(), 1);
        assert!(s.current_statement().is_none());
        assert_eq!(s.phase(), Phase::AwaitingTurnStart);
    }

    #[test]
    fn second_incorrect_counter_doubles() {
        let (s, _) = play(
            &GameState::new(),
            ResponseCategory::Question,
            ResponseCategory::Deflect,
        );
        let (s, r) = play(&s, ResponseCategory::Question, ResponseCategory::Counter);
        assert_eq!(r.base_delta, 15);
        assert_eq!(r.multiplier, 2);
        assert_eq!(r.applied_delta, 30);
        assert!(r.is_combo());
        assert_eq!(s.stress(), 50);
        assert_eq!(s.consecutive_failures(), 2);
    }

    #[test]
    fn third_consecutive_failure_quadruples() {
        let s = GameState {
            consecutive_failures: 2,
            ..GameState::default()
        };
        let (s, r) = play(&s, ResponseCategory::Question, ResponseCategory::Counter);
        assert_eq!(r.multiplier, 4);
        assert_eq!(r.applied_delta, 60);
        assert_eq!(s.stress(), 60);
        assert_eq!(s.consecutive_failures(), 3);
    }

    #[test]
    fn correct_response_resets_streak() {
        let s = GameState {
            stress: 50,
            consecutive_failures: 5,
            ..GameState::default()
        };
        let (s, r) = play(&s, ResponseCategory::Question, ResponseCategory::Question);
        assert!(r.correct);
        assert_eq!(r.multiplier, 1);
        assert_eq!(r.base_delta, -10);
        assert_eq!(s.stress(), 40);
        assert_eq!(s.consecutive_failures(), 0);
    }

    #[test]
    fn correct_response_never_goes_below_zero() {
        let (s, r) = play(
            &GameState::new(),
            ResponseCategory::Empathize,
            ResponseCategory::Empathize,
        );
        assert_eq!(r.applied_delta, -8);
        assert_eq!(s.stress(), 0);
    }

    #[test]
    fn penalty_clamps_at_ceiling_and_loses() {
        let s = GameState {
            stress: 95,
            consecutive_failures: 1,
            ..GameState::default()
        };
        let (s, r) = play(&s, ResponseCategory::Question, ResponseCategory::Counter);
        assert_eq!(r.applied_delta, 30);
        assert_eq!(s.stress(), 100);
        assert!(s.is_terminal());
        assert_eq!(s.outcome(), Outcome::Lost);
        assert_eq!(r.outcome, Outcome::Lost);
    }

    #[test]
    fn stress_loss_beats_turn_win_on_final_turn() {
        let s = GameState {
            stress: 90,
            turn: 9,
            ..GameState::default()
        };
        let (s, _) = play(&s, ResponseCategory::Question, ResponseCategory::Deflect);
        assert_eq!(s.turn(), 10);
        assert_eq!(s.stress(), 100);
        assert_eq!(s.outcome(), Outcome::Lost);
    }

    #[test]
    fn surviving_final_turn_wins() {
        let s = GameState {
            stress: 80,
            turn: 9,
            ..GameState::default()
        };
        let (s, r) = play(&s, ResponseCategory::Question, ResponseCategory::Empathize);
        assert_eq!(s.turn(), 10);
        assert_eq!(s.stress(), 92);
        assert_eq!(s.outcome(), Outcome::Won);
        assert_eq!(r.outcome, Outcome::Won);
    }

    #[test]
    fn all_correct_game_is_won_after_ten_turns() {
        let mut s = GameState::new();
        for i in 0..10 {
            assert!(!s.is_terminal(), "ended early at turn {i}");
            let c = ResponseCategory::ALL[i % 4];
            s = play(&s, c, c).0;
        }
        assert_eq!(s.turn(), 10);
        assert_eq!(s.outcome(), Outcome::Won);
    }

    #[test]
    fn resolve_without_statement_rejected_and_state_untouched() {
        let s = GameState {
            stress: 20,
            turn: 1,
            consecutive_failures: 1,
            ..GameState::default()
        };
        let before = s.clone();
        let err = resolve_response(&s, &GameRules::default(), ResponseCategory::Deflect).unwrap_err();
        assert_eq!(err, EngineError::NoActiveStatement);
        assert_eq!(s, before);
    }

    #[test]
    fn resolve_after_game_over_rejected() {
        let pending = turn_expecting(&GameState::new(), ResponseCategory::Deflect);
        let s = GameState {
            outcome: Outcome::Lost,
            ..pending
        };
        let err = resolve_response(&s, &GameRules::default(), ResponseCategory::Deflect).unwrap_err();
        assert_eq!(err, EngineError::GameOver);
    }

    #[test]
    fn check_termination_order() {
        let rules = GameRules::default();
        let lost_and_done = GameState {
            stress: 100,
            turn: 10,
            ..GameState::default()
        };
        assert_eq!(check_termination(&lost_and_done, &rules), Outcome::Lost);
        let done = GameState {
            stress: 99,
            turn: 10,
            ..GameState::default()
        };
        assert_eq!(check_termination(&done, &rules), Outcome::Won);
        let going = GameState {
            stress: 99,
            turn: 9,
            ..GameState::default()
        };
        assert_eq!(check_termination(&going, &rules), Outcome::Undecided);
    }

    #[test]
    fn reset_from_lost_game_allows_new_turn() {
        let lost = GameState {
            stress: 100,
            turn: 3,
            outcome: Outcome::Lost,
            consecutive_failures: 3,
            ..GameState::default()
        };
        assert_eq!(lost.phase(), Phase::Terminal);
        let mut picker = ScriptedPicker::constant(0);
        let err = start_turn(&lost, &GameRules::default(), &table(), &mut picker).unwrap_err();
        assert_eq!(err, EngineError::GameOver);

        let s = reset();
        assert_eq!(s, GameState::default());
        assert_eq!(s.phase(), Phase::AwaitingTurnStart);
        let next = turn_expecting(&s, ResponseCategory::Deflect);
        assert_eq!(next.turn(), 1);
        assert_eq!(next.stress(), 0);
    }

    #[test]
    fn resolution_serializes_for_records() {
        let (_, r) = play(&GameState::new(), ResponseCategory::Question, ResponseCategory::Deflect);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["category"], "deflect");
        assert_eq!(json["expected"], "question");
        assert_eq!(json["correct"], false);
        assert_eq!(json["multiplier"], 1);
    }

    #[test]
    fn combo_multiplier_doubles_then_caps() {
        assert_eq!(combo_multiplier(0, 64), 1);
        assert_eq!(combo_multiplier(1, 64), 1);
        assert_eq!(combo_multiplier(2, 64), 2);
        assert_eq!(combo_multiplier(3, 64), 4);
        assert_eq!(combo_multiplier(4, 64), 8);
        assert_eq!(combo_multiplier(7, 64), 64);
        assert_eq!(combo_multiplier(8, 64), 64);
        assert_eq!(combo_multiplier(40, 64), 64);
        assert_eq!(combo_multiplier(u32::MAX, 64), 64);
        assert_eq!(combo_multiplier(5, 0), 1);
    }

    #[test]
    fn long_streak_is_capped_in_resolution() {
        let rules = GameRules::default().with_stress_ceiling(u32::MAX);
        let s = GameState {
            consecutive_failures: 50,
            ..GameState::default()
        };
        let mut picker = ScriptedPicker::constant(ResponseCategory::Question.index());
        let pending = start_turn(&s, &rules, &table(), &mut picker).unwrap();
        let (s, r) = resolve_response(&pending, &rules, ResponseCategory::Deflect).unwrap();
        assert_eq!(r.multiplier, 64);
        assert_eq!(r.applied_delta, 20 * 64);
        assert_eq!(s.stress(), 1280);
        assert_eq!(s.consecutive_failures(), 51);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Start(usize),
        Respond(usize),
        Reset,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0usize..4).prop_map(Op::Start),
            4 => (0usize..4).prop_map(Op::Respond),
            1 => Just(Op::Reset),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_sequence(ops in proptest::collection::vec(op(), 0..80)) {
            let rules = GameRules::default();
            let content = table();
            let mut s = GameState::new();
            for op in ops {
                let before = s.clone();
                match op {
                    Op::Start(i) => {
                        let mut picker = ScriptedPicker::constant(i);
                        if let Ok(next) = start_turn(&s, &rules, &content, &mut picker) {
                            prop_assert_eq!(next.turn(), before.turn() + 1);
                            s = next;
                        }
                    }
                    Op::Respond(i) => {
                        let choice = ResponseCategory::ALL[i];
                        match resolve_response(&s, &rules, choice) {
                            Ok((next, r)) => {
                                prop_assert_eq!(next.turn(), before.turn());
                                prop_assert!(next.current_statement().is_none());
                                if r.correct {
                                    prop_assert_eq!(next.consecutive_failures(), 0);
                                } else {
                                    prop_assert_eq!(
                                        next.consecutive_failures(),
                                        before.consecutive_failures() + 1
                                    );
                                }
                                s = next;
                            }
                            Err(_) => prop_assert_eq!(&s, &before),
                        }
                    }
                    Op::Reset => s = reset(),
                }
                prop_assert!(s.stress() <= rules.stress_ceiling);
                prop_assert!(s.turn() <= rules.max_turns);
                if s.stress() >= rules.stress_ceiling {
                    prop_assert_eq!(s.outcome(), Outcome::Lost);
                }
            }
        }

        #[test]
        fn nth_failure_scales_by_power_of_two(n in 2u32..=7, choice in 0usize..4) {
            let rules = GameRules::default().with_stress_ceiling(u32::MAX);
            let s = GameState { consecutive_failures: n - 1, ..GameState::default() };
            let wrong = ResponseCategory::ALL[choice];
            let correct = ResponseCategory::ALL[(choice + 1) % 4];
            let mut picker = ScriptedPicker::constant(correct.index());
            let pending = start_turn(&s, &rules, &table(), &mut picker).unwrap();
            let (_, r) = resolve_response(&pending, &rules, wrong).unwrap();
            prop_assert_eq!(r.multiplier, 1u32 << (n - 1));
            prop_assert_eq!(r.applied_delta, rules.tables.failure_delta(wrong) * (1i32 << (n - 1)));
        }
    }
}
