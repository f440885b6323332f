//! Table-like row extraction from free text.
//!
//! Upstream OCR produces plain text lines; tabs from the source document
//! rarely survive extraction, so runs of two or more spaces are accepted
//! as column separators too. The output rows use positional keys
//! (`col1`, `col2`, ...) and feed the same inference path as structured
//! input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::value::{CellValue, RowRecord};

static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Minimum columns for a line to count as a table row rather than prose.
pub const MIN_TABLE_COLUMNS: usize = 3;

/// Split one line into column-like tokens.
///
/// Tab-delimited lines split on tabs; otherwise runs of >=2 whitespace
/// characters separate columns. Tokens are trimmed and empty tokens
/// dropped.
pub fn split_table_line(line: &str) -> Vec<String> {
    let line = line.trim();
    let parts: Vec<&str> = if line.contains('\t') {
        line.split('\t').collect()
    } else {
        WHITESPACE_RUN_RE.split(line).collect()
    };

    parts
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Build positionally-keyed row records from text lines.
///
/// Lines splitting into fewer than [`MIN_TABLE_COLUMNS`] tokens are
/// skipped as prose.
pub fn rows_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<RowRecord> {
    lines
        .into_iter()
        .filter_map(|line| {
            let parts = split_table_line(line);
            if parts.len() < MIN_TABLE_COLUMNS {
                return None;
            }
            Some(
                parts
                    .into_iter()
                    .enumerate()
                    .map(|(i, value)| (format!("col{}", i + 1), CellValue::Text(value)))
                    .collect(),
            )
        })
        .collect()
}

/// Build row records from a whole block of text, one candidate row per
/// line.
pub fn rows_from_text(text: &str) -> Vec<RowRecord> {
    rows_from_lines(text.lines())
}
