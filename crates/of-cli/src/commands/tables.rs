use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use of_core::ResponseCategory;
use of_core::engine::combo_multiplier;

pub fn run(config: Option<&Path>) -> Result<(), String> {
    let rules = super::load_rules(config)?;

    println!(
        "  {} {} turns, stress ceiling {}, multiplier cap x{}",
        "Rules".bold(),
        rules.max_turns,
        rules.stress_ceiling,
        rules.multiplier_cap
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Category", "Button", "Success", "Failure"]);
    for category in ResponseCategory::ALL {
        table.add_row(vec![
            (category.index() + 1).to_string(),
            category.to_string(),
            category.label().to_string(),
            format!("{:+}", rules.tables.success_delta(category)),
            format!("{:+}", rules.tables.failure_delta(category)),
        ]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Consecutive failures".bold().underline());
    let mut combos = Table::new();
    combos.set_content_arrangement(ContentArrangement::Dynamic);
    combos.set_header(vec!["Streak", "Multiplier"]);
    let mut streak = 1;
    loop {
        let multiplier = combo_multiplier(streak, rules.multiplier_cap);
        combos.add_row(vec![streak.to_string(), format!("x{multiplier}")]);
        if multiplier >= rules.multiplier_cap {
            break;
        }
        streak += 1;
    }
    println!("{combos}");
    println!("  Further failures stay at x{}.", rules.multiplier_cap);

    Ok(())
}
