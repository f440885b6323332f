//! Extract command - pull table-like rows out of a plain-text file.

use std::path::PathBuf;

use colored::Colorize;
use surmise::rows_from_text;

pub fn run(file: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&file)
        .map_err(|e| format!("Cannot read {}: {}", file.display(), e))?;

    let rows = rows_from_text(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No table-like lines found.".yellow());
        return Ok(());
    }

    println!(
        "Extracted {} table row(s) from {}",
        rows.len().to_string().white().bold(),
        file.display()
    );
    for row in &rows {
        let cells: Vec<String> = row.values().map(|v| v.normalize()).collect();
        println!("  {}", cells.join(" | "));
    }

    Ok(())
}
