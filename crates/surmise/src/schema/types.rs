//! Core type definitions for schema representation.

use serde::{Deserialize, Serialize};

/// Inferred semantic type for a column.
///
/// Exactly one type is assigned per column. The classifier resolves the
/// overlaps between them ("1" is a boolean literal and an integer literal)
/// through its precedence order, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Numeric values, possibly with a decimal part.
    Number,
    /// Whole numbers only.
    Integer,
    /// Date or date-time values.
    Date,
    /// Boolean literals (true/false, yes/no, 0/1, ...).
    Boolean,
    /// Low-cardinality values suggesting an enumerated domain.
    Categorical,
    /// Free text; the fallback when nothing else matches.
    String,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Number | ColumnType::Integer)
    }
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::String
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColumnType::Number => "number",
            ColumnType::Integer => "integer",
            ColumnType::Date => "date",
            ColumnType::Boolean => "boolean",
            ColumnType::Categorical => "categorical",
            ColumnType::String => "string",
        };
        f.write_str(name)
    }
}
