//! Infer command - print the inferred schema of a data file.

use std::path::PathBuf;

use colored::Colorize;
use surmise::{Parser, ParserConfig, SchemaInference};

pub fn run(
    file: PathBuf,
    json: bool,
    sample_size: usize,
    no_header: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let parser = Parser::with_config(ParserConfig {
        has_header: !no_header,
        ..ParserConfig::default()
    });
    let (rows, metadata) = parser.parse_file(&file)?;

    if verbose {
        println!(
            "{} {} ({}, {} rows, {} columns)",
            "Parsed".cyan().bold(),
            metadata.file.white(),
            metadata.format,
            metadata.row_count,
            metadata.column_count
        );
    }

    let schema = SchemaInference::with_sample_size(sample_size).infer(&rows);

    if json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Schema for".cyan().bold(),
        file.display().to_string().white()
    );
    println!();
    for col in &schema {
        let confidence = col
            .confidence
            .map(|c| format!("{:.3}", c))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:24} {:12} {:9} {}",
            col.name,
            col.column_type.to_string(),
            if col.nullable { "nullable" } else { "required" },
            confidence
        );
    }
    println!();
    println!(
        "{} columns, sampled up to {} rows",
        schema.len().to_string().white().bold(),
        sample_size
    );

    Ok(())
}
