//! Column descriptor emitted by the inference engine.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Schema for a single column.
///
/// Descriptors are computed fresh per inference call and never mutated
/// afterwards; they carry no reference to the rows they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column key.
    pub name: String,
    /// Inferred type; defaults to `string` when absent in serialized form.
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    /// True if any sampled value for this key was absent or empty.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// Heuristic score in [0, 1], rounded to 3 decimal places. Absent when
    /// the column could not be scored (all sampled values empty).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

fn default_nullable() -> bool {
    true
}

impl ColumnSchema {
    /// Create a descriptor with an explicit type and score.
    pub fn new(
        name: impl Into<String>,
        column_type: ColumnType,
        nullable: bool,
        confidence: f64,
    ) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable,
            confidence: Some(confidence),
        }
    }

    /// Descriptor for a column with no signal to classify on: every
    /// sampled value was empty.
    pub fn unscored(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: ColumnType::String,
            nullable: true,
            confidence: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_omitted_when_absent() {
        let json = serde_json::to_string(&ColumnSchema::unscored("blank")).unwrap();
        assert!(!json.contains("confidence"));
        assert!(json.contains("\"type\":\"string\""));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let col: ColumnSchema = serde_json::from_str(r#"{"name": "a"}"#).unwrap();
        assert_eq!(col.column_type, ColumnType::String);
        assert!(col.nullable);
        assert!(col.confidence.is_none());
    }
}
