use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(statements: Option<&Path>, json: bool) -> Result<(), String> {
    let content = super::load_content(statements)?;

    if json {
        let out = serde_json::to_string_pretty(content.statements())
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Kind", "Answer", "Statement"]);
    for (i, statement) in content.statements().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            statement.kind.to_string(),
            statement.correct.to_string(),
            statement.text.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} statements", content.len());

    Ok(())
}
