//! Column classification and schema building.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::schema::{ColumnSchema, ColumnType};
use crate::value::{RowRecord, normalized_value};

use super::predicates::{is_boolean_literal, is_date, is_integer, is_number};

// =============================================================================
// CLASSIFICATION CONSTANTS
// =============================================================================
// Thresholds and the precedence they belong to are the contract of the
// engine, not tuning knobs. Changing an order or a threshold changes
// classification results for existing datasets.

/// Maximum rows read for inference, regardless of dataset size.
pub const SAMPLE_SIZE: usize = 200;

/// Share of non-empty values that must be boolean literals.
const BOOLEAN_THRESHOLD: f64 = 0.8;
/// Share of non-empty values that must match the integer or number pattern.
const NUMERIC_THRESHOLD: f64 = 0.5;
/// Share of non-empty values that must parse as dates.
const DATE_THRESHOLD: f64 = 0.5;
/// Cardinality cap for categorical columns: `max(10, 0.3 * ne)`.
const CATEGORICAL_CARDINALITY_FLOOR: f64 = 10.0;
const CATEGORICAL_CARDINALITY_RATIO: f64 = 0.3;
/// Categorical confidence is derived from cardinality, then clamped.
const CATEGORICAL_CONFIDENCE_MIN: f64 = 0.3;
const CATEGORICAL_CONFIDENCE_MAX: f64 = 0.9;
/// Fixed confidence for the string fallback.
const STRING_CONFIDENCE: f64 = 0.1;

fn round3(confidence: f64) -> f64 {
    (confidence * 1000.0).round() / 1000.0
}

/// Classify one column from its normalized values, one per sampled row.
///
/// Absent keys must already be normalized to `""` so that `values` is
/// aligned with the sample by index. Never fails: unparseable values fail
/// their predicate instead of aborting the column.
pub fn classify_column(name: &str, values: &[String]) -> ColumnSchema {
    let n = values.len();
    let non_empty: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .collect();
    let ne = non_empty.len();

    // No signal to classify on.
    if ne == 0 {
        return ColumnSchema::unscored(name);
    }
    let ne_f = ne as f64;

    let num = non_empty.iter().filter(|v| is_number(v)).count() as f64;
    let integ = non_empty.iter().filter(|v| is_integer(v)).count() as f64;
    let boo = non_empty.iter().filter(|v| is_boolean_literal(v)).count() as f64;
    let dat = non_empty.iter().filter(|v| is_date(v)).count() as f64;
    let card = non_empty.iter().copied().collect::<HashSet<&str>>().len() as f64;

    // Ordered precedence with early exit. Boolean runs first with the
    // strictest threshold because "0"/"1" also match the integer pattern;
    // integer runs before number because every integer literal is also a
    // number literal.
    let (column_type, confidence) = if boo >= BOOLEAN_THRESHOLD * ne_f {
        (ColumnType::Boolean, boo / ne_f)
    } else if integ >= NUMERIC_THRESHOLD * ne_f {
        (ColumnType::Integer, integ / ne_f)
    } else if num >= NUMERIC_THRESHOLD * ne_f {
        (ColumnType::Number, num / ne_f)
    } else if dat >= DATE_THRESHOLD * ne_f {
        (ColumnType::Date, dat / ne_f)
    } else if card <= CATEGORICAL_CARDINALITY_FLOOR.max(CATEGORICAL_CARDINALITY_RATIO * ne_f) {
        let derived = (1.0 - card / ne_f)
            .clamp(CATEGORICAL_CONFIDENCE_MIN, CATEGORICAL_CONFIDENCE_MAX);
        (ColumnType::Categorical, derived)
    } else {
        (ColumnType::String, STRING_CONFIDENCE)
    };

    ColumnSchema::new(name, column_type, ne < n, round3(confidence))
}

/// Schema inference over a bounded sample of row records.
///
/// Each call is a pure function of its input: no I/O, no shared state,
/// safe to invoke concurrently from independent callers.
#[derive(Debug, Clone)]
pub struct SchemaInference {
    /// Rows read from the front of the input; the rest is never touched.
    sample_size: usize,
}

impl SchemaInference {
    /// Inference with the default sample cap of 200 rows.
    pub fn new() -> Self {
        Self {
            sample_size: SAMPLE_SIZE,
        }
    }

    /// Inference with a custom sample cap.
    pub fn with_sample_size(sample_size: usize) -> Self {
        Self { sample_size }
    }

    /// Infer one descriptor per column key appearing anywhere in the
    /// sample, in first-seen order.
    ///
    /// Rows may be ragged; a key missing from a given row counts as an
    /// absent value for that row. An empty input yields an empty list.
    pub fn infer(&self, rows: &[RowRecord]) -> Vec<ColumnSchema> {
        if rows.is_empty() {
            return Vec::new();
        }
        let sample = &rows[..rows.len().min(self.sample_size)];

        // Union of keys across the sample, not intersection. First-seen
        // order keeps repeated calls on identical input deterministic.
        let mut keys: IndexSet<&str> = IndexSet::new();
        for row in sample {
            for key in row.keys() {
                keys.insert(key.as_str());
            }
        }

        keys.iter()
            .map(|key| {
                let values: Vec<String> =
                    sample.iter().map(|row| normalized_value(row, key)).collect();
                classify_column(key, &values)
            })
            .collect()
    }
}

impl Default for SchemaInference {
    fn default() -> Self {
        Self::new()
    }
}

/// Infer a schema with the default sample cap.
pub fn infer_schema(rows: &[RowRecord]) -> Vec<ColumnSchema> {
    SchemaInference::new().infer(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_boolean_wins_over_integer() {
        let col = classify_column("flag", &column(&["0", "1", "1", "0"]));
        assert_eq!(col.column_type, ColumnType::Boolean);
        assert_eq!(col.confidence, Some(1.0));
    }

    #[test]
    fn test_integer_wins_over_number() {
        let col = classify_column("count", &column(&["1", "2", "3"]));
        assert_eq!(col.column_type, ColumnType::Integer);
        assert_eq!(col.confidence, Some(1.0));
        assert!(!col.nullable);
    }

    #[test]
    fn test_number_with_decimals() {
        let col = classify_column("price", &column(&["1.5", "2.25", "3.0", "4"]));
        assert_eq!(col.column_type, ColumnType::Number);
        assert_eq!(col.confidence, Some(1.0));
    }

    #[test]
    fn test_mixed_integers_below_threshold_fall_through() {
        // 2 of 5 integers: below 0.5, but all five are low-cardinality.
        let col = classify_column(
            "mixed",
            &column(&["1", "2", "apple", "banana", "cherry"]),
        );
        assert_eq!(col.column_type, ColumnType::Categorical);
    }

    #[test]
    fn test_date_column_with_empties() {
        let col = classify_column("when", &column(&["2024-01-05", "2024-02-10", ""]));
        assert_eq!(col.column_type, ColumnType::Date);
        assert!(col.nullable);
        // Scored over the 2 non-empty values.
        assert_eq!(col.confidence, Some(1.0));
    }

    #[test]
    fn test_categorical_confidence_is_clamped() {
        // card=3, ne=4: raw score 0.25 clamps up to 0.3.
        let col = classify_column("color", &column(&["red", "blue", "red", "green"]));
        assert_eq!(col.column_type, ColumnType::Categorical);
        assert_eq!(col.confidence, Some(0.3));
    }

    #[test]
    fn test_string_fallback_has_fixed_confidence() {
        let values: Vec<String> = (0..40).map(|i| format!("free text value {i}")).collect();
        let col = classify_column("notes", &values);
        assert_eq!(col.column_type, ColumnType::String);
        assert_eq!(col.confidence, Some(0.1));
    }

    #[test]
    fn test_all_empty_column_is_unscored() {
        let col = classify_column("blank", &column(&["", "", ""]));
        assert_eq!(col.column_type, ColumnType::String);
        assert!(col.nullable);
        assert_eq!(col.confidence, None);
    }

    #[test]
    fn test_confidence_rounded_to_three_decimals() {
        // 2 of 3 integers: 0.666666... rounds to 0.667.
        let col = classify_column("mostly", &column(&["1", "2", "x"]));
        assert_eq!(col.column_type, ColumnType::Integer);
        assert_eq!(col.confidence, Some(0.667));
    }

    #[test]
    fn test_infer_empty_input() {
        assert!(infer_schema(&[]).is_empty());
    }

    #[test]
    fn test_infer_discovers_keys_across_ragged_rows() {
        let rows: Vec<RowRecord> = vec![
            serde_json::from_str(r#"{"a": "1"}"#).unwrap(),
            serde_json::from_str(r#"{"b": "x"}"#).unwrap(),
            serde_json::from_str(r#"{"a": "2", "b": "y"}"#).unwrap(),
        ];
        let schema = infer_schema(&rows);

        assert_eq!(schema.len(), 2);
        assert_eq!(schema[0].name, "a");
        assert_eq!(schema[1].name, "b");
        // Each key is missing from one of the three rows.
        assert!(schema.iter().all(|c| c.nullable));
    }

    #[test]
    fn test_sample_cap_bounds_inference() {
        // 200 integer rows, then garbage: the cap keeps the garbage out.
        let mut rows: Vec<RowRecord> = (0..200)
            .map(|i| serde_json::from_str(&format!(r#"{{"a": "{i}"}}"#)).unwrap())
            .collect();
        for _ in 0..300 {
            rows.push(serde_json::from_str(r#"{"a": "junk", "z": "1"}"#).unwrap());
        }

        let schema = infer_schema(&rows);
        assert_eq!(schema.len(), 1, "keys past the sample cap must not be discovered");
        assert_eq!(schema[0].column_type, ColumnType::Integer);
        assert_eq!(schema[0].confidence, Some(1.0));
    }

    #[test]
    fn test_custom_sample_size() {
        let rows: Vec<RowRecord> = vec![
            serde_json::from_str(r#"{"a": "1"}"#).unwrap(),
            serde_json::from_str(r#"{"a": "not a number"}"#).unwrap(),
        ];
        let schema = SchemaInference::with_sample_size(1).infer(&rows);
        assert_eq!(schema[0].column_type, ColumnType::Integer);
        assert_eq!(schema[0].confidence, Some(1.0));
    }

    #[test]
    fn test_single_row_without_keys_yields_no_descriptors() {
        let rows: Vec<RowRecord> = vec![RowRecord::new()];
        assert!(infer_schema(&rows).is_empty());
    }

    #[test]
    fn test_nullable_from_explicit_null_cells() {
        let rows: Vec<RowRecord> = vec![
            serde_json::from_str(r#"{"a": "1"}"#).unwrap(),
            serde_json::from_str(r#"{"a": null}"#).unwrap(),
        ];
        let schema = infer_schema(&rows);
        assert!(schema[0].nullable);
    }

    #[test]
    fn test_non_string_scalars_classify_via_normalization() {
        let rows: Vec<RowRecord> = vec![
            serde_json::from_str(r#"{"n": 1, "f": true}"#).unwrap(),
            serde_json::from_str(r#"{"n": 2, "f": false}"#).unwrap(),
            serde_json::from_str(r#"{"n": 3, "f": true}"#).unwrap(),
        ];
        let schema = infer_schema(&rows);

        assert_eq!(schema[0].column_type, ColumnType::Integer);
        assert_eq!(schema[1].column_type, ColumnType::Boolean);
    }
}
