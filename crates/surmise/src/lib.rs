//! Surmise: schema inference and import preview for tabular data of
//! unknown provenance.
//!
//! Row records arrive from CSV files, spreadsheet exports or OCR text
//! split into columns; surmise decides for each column whether it is
//! boolean, integer, number, date, categorical or string, with a
//! confidence score per column.
//!
//! # Core Principles
//!
//! - **Deterministic**: a fixed precedence order and fixed thresholds;
//!   the same rows always produce the same schema.
//! - **Bounded**: inference reads at most the first 200 rows, whatever
//!   the dataset size.
//! - **Classify, never coerce**: values are tested against literal
//!   shapes; nothing is converted or rewritten.
//!
//! # Example
//!
//! ```
//! use surmise::{ColumnType, RowRecord, infer_schema};
//!
//! let rows: Vec<RowRecord> =
//!     serde_json::from_str(r#"[{"age": "31"}, {"age": "44"}]"#).unwrap();
//!
//! let schema = infer_schema(&rows);
//! assert_eq!(schema[0].name, "age");
//! assert_eq!(schema[0].column_type, ColumnType::Integer);
//! ```

pub mod error;
pub mod inference;
pub mod input;
pub mod preview;
pub mod schema;
pub mod value;

pub use error::{Result, SurmiseError};
pub use inference::{SAMPLE_SIZE, SchemaInference, infer_schema};
pub use input::{Parser, ParserConfig, SourceMetadata, rows_from_text};
pub use preview::{ImportPreviewRequest, ImportPreviewResponse, SourceType, preview};
pub use schema::{ColumnSchema, ColumnType};
pub use value::{CellValue, RowRecord, rows_from_json};
