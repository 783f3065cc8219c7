use std::path::Path;

use colored::Colorize;

pub fn run(config: Option<&Path>, statements: Option<&Path>) -> Result<(), String> {
    let rules = super::load_rules(config)?;
    let content = super::load_content(statements)?;

    for category in content.categories_missing() {
        eprintln!(
            "  {} no statement is answered by {category}",
            "warning:".yellow().bold()
        );
    }

    println!("  All checks passed.");
    println!(
        "  {} turns, stress ceiling {}, {} statements",
        rules.max_turns,
        rules.stress_ceiling,
        content.len()
    );

    Ok(())
}
