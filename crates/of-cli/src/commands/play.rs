use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use of_core::narration::INTRO;
use of_core::{Outcome, RandomPicker, Session};

pub fn run(seed: Option<u64>, config: Option<&Path>, statements: Option<&Path>) -> Result<(), String> {
    let rules = super::load_rules(config)?;
    let content = super::load_content(statements)?;
    let max_turns = rules.max_turns;

    let mut session = Session::new(rules, content, Box::new(RandomPicker::new(seed)))
        .map_err(|e| format!("failed to start session: {e}"))?;

    println!("{INTRO}\n");
    println!("  {} Survive {max_turns} turns.", "Otameshi Fighters: Office".bold());
    println!("  Type 'start' to begin, 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let before = session.state().outcome();
        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}\n", highlight(&output, before, session.state().outcome()));
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

/// Colour the output of the turn that ended the game.
fn highlight(output: &str, before: Outcome, after: Outcome) -> String {
    if before != Outcome::Undecided {
        return output.to_string();
    }
    match after {
        Outcome::Won => output.green().bold().to_string(),
        Outcome::Lost => output.red().bold().to_string(),
        Outcome::Undecided => output.to_string(),
    }
}
