//! Preview command - full import preview (sample, schema, warnings).

use std::path::PathBuf;

use surmise::{ImportPreviewRequest, Parser, ParserConfig, SourceType, preview, rows_from_json};

pub fn run(file: PathBuf, no_header: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    // JSON files carry already-structured rows; anything else goes
    // through the delimited-file producer.
    let rows = if file.extension().is_some_and(|e| e == "json") {
        let json = std::fs::read_to_string(&file)?;
        rows_from_json(&json)?
    } else {
        let parser = Parser::with_config(ParserConfig {
            has_header: !no_header,
            ..ParserConfig::default()
        });
        parser.parse_file(&file)?.0
    };

    let response = preview(ImportPreviewRequest {
        source_type: SourceType::Csv,
        rows,
        schema: None,
    });

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
