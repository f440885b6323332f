//! Error types for the surmise library.
//!
//! Inference itself never fails; these errors belong to the boundaries
//! around it: reading input files and deserializing request payloads.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for surmise operations.
#[derive(Debug, Error)]
pub enum SurmiseError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no rows to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Malformed payload: rows that are not mappings, or invalid JSON.
    /// Distinct from any classification outcome.
    #[error("Invalid input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for surmise operations.
pub type Result<T> = std::result::Result<T, SurmiseError>;
