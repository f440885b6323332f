//! Cell values and row records as they arrive from upstream producers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single cell as supplied by a producer (CSV parser, spreadsheet
/// export, OCR line splitter, or a JSON request body).
///
/// Deserialized untagged, so JSON scalars map directly: `null`, booleans,
/// integers, floats and strings each land in their own variant. Variant
/// order matters for untagged matching: integers must be tried before
/// floats so `3` stays `Int(3)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Explicit null.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text scalar.
    Text(String),
}

impl CellValue {
    /// Normalize a cell to its trimmed string form.
    ///
    /// `Null` becomes the empty string; every other scalar uses its
    /// display form with surrounding whitespace stripped. All predicates
    /// operate on this form only.
    pub fn normalize(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Text(s) => s.trim().to_string(),
        }
    }

    /// True when the cell normalizes to the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// One row of tabular input: column key to cell value.
///
/// Keys are not guaranteed consistent across rows in the same dataset;
/// ragged input is expected. Insertion order is preserved so repeated
/// inference over the same rows discovers columns in the same order.
pub type RowRecord = IndexMap<String, CellValue>;

/// Normalized value of `key` in `record`, with an absent key treated the
/// same as an explicit null.
pub fn normalized_value(record: &RowRecord, key: &str) -> String {
    record.get(key).map(CellValue::normalize).unwrap_or_default()
}

/// Deserialize a JSON array of objects into row records.
///
/// This is the input-validation boundary for already-structured rows:
/// elements that are not mappings fail here, before inference ever runs,
/// and the failure is distinct from any classification outcome.
pub fn rows_from_json(json: &str) -> crate::error::Result<Vec<RowRecord>> {
    Ok(serde_json::from_str(json)?)
}
