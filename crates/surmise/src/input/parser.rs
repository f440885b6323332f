//! CSV/TSV producer with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::SourceMetadata;
use crate::error::{Result, SurmiseError};
use crate::value::{CellValue, RowRecord};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row. Headerless files get
    /// positional keys (`col1`, `col2`, ...).
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited files into row records.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return its row records plus source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Vec<RowRecord>, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| SurmiseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| SurmiseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let (rows, column_count) = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            rows.len(),
            column_count,
        );

        Ok((rows, metadata))
    }

    /// Parse bytes into row records keyed by header (or positional) names.
    ///
    /// Short rows simply omit the trailing keys, so raggedness flows
    /// through to nullable detection downstream. Cells past the key count
    /// are ignored.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<(Vec<RowRecord>, usize)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.records();

        // Column keys come from the header row, or are generated from the
        // width of the first data row.
        let mut keys: Vec<String> = Vec::new();
        let mut rows: Vec<RowRecord> = Vec::new();

        if self.config.has_header {
            match records.next() {
                Some(record) => {
                    keys = record?.iter().map(|s| s.trim().to_string()).collect();
                }
                None => return Err(SurmiseError::EmptyData("no header row found".to_string())),
            }
            if keys.iter().all(|k| k.is_empty()) {
                return Err(SurmiseError::EmptyData("no columns found".to_string()));
            }
        }

        for result in records {
            if let Some(max) = self.config.max_rows {
                if rows.len() >= max {
                    break;
                }
            }

            let record = result?;
            if keys.is_empty() {
                keys = (1..=record.len()).map(|i| format!("col{i}")).collect();
            }

            let row: RowRecord = keys
                .iter()
                .zip(record.iter())
                .map(|(key, cell)| (key.clone(), CellValue::Text(cell.to_string())))
                .collect();
            rows.push(row);
        }

        if keys.is_empty() {
            return Err(SurmiseError::EmptyData("no data rows found".to_string()));
        }

        Ok((rows, keys.len()))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(SurmiseError::EmptyData("no lines to analyze".to_string()));
    }

    // Consistent per-line counts beat raw counts; tabs get a slight bonus
    // since they almost never appear inside actual field values.
    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
