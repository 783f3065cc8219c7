use std::path::Path;

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use of_core::{ContentTable, GameRules, Outcome, RandomPicker, ResponseCategory, Session};

/// How the autoplayer picks its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Always the correct answer.
    Oracle,
    /// A uniformly random category.
    Random,
    /// Always let it slide.
    Deflect,
    /// Always correct the logic.
    Counter,
    /// Always empathize.
    Empathize,
    /// Always ask back.
    Question,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::Random => "random",
            Self::Deflect => "deflect",
            Self::Counter => "counter",
            Self::Empathize => "empathize",
            Self::Question => "question",
        }
    }

    fn choose(self, correct: ResponseCategory, rng: &mut StdRng) -> ResponseCategory {
        match self {
            Self::Oracle => correct,
            Self::Random => ResponseCategory::ALL[rng.random_range(0..ResponseCategory::ALL.len())],
            Self::Deflect => ResponseCategory::Deflect,
            Self::Counter => ResponseCategory::Counter,
            Self::Empathize => ResponseCategory::Empathize,
            Self::Question => ResponseCategory::Question,
        }
    }
}

/// Aggregate results of a batch of games.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_stress: u64,
    pub total_turns: u64,
    pub longest_streak: u32,
}

impl Summary {
    fn average(total: u64, games: u32) -> f64 {
        if games == 0 {
            0.0
        } else {
            total as f64 / f64::from(games)
        }
    }

    fn win_rate(&self) -> f64 {
        Self::average(u64::from(self.wins) * 100, self.games)
    }
}

pub fn run(
    games: u32,
    seed: u64,
    strategy: Strategy,
    config: Option<&Path>,
    statements: Option<&Path>,
) -> Result<(), String> {
    let rules = super::load_rules(config)?;
    let content = super::load_content(statements)?;
    let summary = simulate(games, seed, strategy, rules, content)?;

    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({games} games, seed={seed}, strategy={})", strategy.name()).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Games", "Wins", "Losses", "Win rate", "Avg stress", "Avg turns", "Longest streak"]);
    table.add_row(vec![
        summary.games.to_string(),
        summary.wins.to_string(),
        summary.losses.to_string(),
        format!("{:.1}%", summary.win_rate()),
        format!("{:.1}", Summary::average(summary.total_stress, summary.games)),
        format!("{:.1}", Summary::average(summary.total_turns, summary.games)),
        summary.longest_streak.to_string(),
    ]);
    println!("{table}");

    Ok(())
}

/// Play `games` games back to back with one session and one answer RNG.
pub fn simulate(
    games: u32,
    seed: u64,
    strategy: Strategy,
    rules: GameRules,
    content: ContentTable,
) -> Result<Summary, String> {
    let mut session = Session::new(rules, content, Box::new(RandomPicker::seeded(seed)))
        .map_err(|e| e.to_string())?;
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut summary = Summary {
        games,
        ..Summary::default()
    };

    for game in 0..games {
        session.reset();
        while !session.state().is_terminal() {
            let correct = session.start_turn().map_err(|e| e.to_string())?.correct;
            let resolution = session
                .respond(strategy.choose(correct, &mut rng))
                .map_err(|e| e.to_string())?;
            summary.longest_streak = summary.longest_streak.max(resolution.streak);
        }

        let state = session.state();
        match state.outcome() {
            Outcome::Won => summary.wins += 1,
            Outcome::Lost => summary.losses += 1,
            Outcome::Undecided => {}
        }
        summary.total_stress += u64::from(state.stress());
        summary.total_turns += u64::from(state.turn());
        debug!(game, outcome = %state.outcome(), stress = state.stress(), "game finished");
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use of_core::{Statement, StatementKind};

    fn only(correct: ResponseCategory) -> ContentTable {
        ContentTable::new(vec![Statement::new(
            "We did it this way in my day.",
            correct,
            StatementKind::Story,
            ["a", "b", "c", "d"],
        )])
        .unwrap()
    }

    #[test]
    fn oracle_always_wins() {
        let s = simulate(50, 1, Strategy::Oracle, GameRules::default(), ContentTable::builtin())
            .unwrap();
        assert_eq!(s.wins, 50);
        assert_eq!(s.losses, 0);
        assert_eq!(s.total_stress, 0);
        assert_eq!(s.total_turns, 500);
        assert_eq!(s.longest_streak, 0);
    }

    #[test]
    fn wrong_fixed_answer_always_loses_on_turn_three() {
        let s = simulate(
            10,
            1,
            Strategy::Deflect,
            GameRules::default(),
            only(ResponseCategory::Question),
        )
        .unwrap();
        // 20, then 40 and 80 with the combo: 140 clamps to 100
        assert_eq!(s.losses, 10);
        assert_eq!(s.total_turns, 30);
        assert_eq!(s.total_stress, 1000);
        assert_eq!(s.longest_streak, 3);
    }

    #[test]
    fn same_seed_same_summary() {
        let a = simulate(100, 7, Strategy::Random, GameRules::default(), ContentTable::builtin())
            .unwrap();
        let b = simulate(100, 7, Strategy::Random, GameRules::default(), ContentTable::builtin())
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.wins + a.losses, 100);
    }

    #[test]
    fn win_rate_handles_zero_games() {
        let s = Summary::default();
        assert_eq!(s.win_rate(), 0.0);
    }
}
