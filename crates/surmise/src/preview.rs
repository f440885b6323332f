//! Import preview: bounded display sample, schema and volume warnings.

use serde::{Deserialize, Serialize};

use crate::inference::infer_schema;
use crate::schema::ColumnSchema;
use crate::value::RowRecord;

/// Rows returned in the display sample. Independent of the inference
/// sample cap, even though the two happen to share a value.
pub const PREVIEW_ROWS: usize = 200;

/// Row count past which the preview warns that client-side display will
/// be truncated.
pub const LARGE_IMPORT_THRESHOLD: usize = 50_000;

/// Where the rows came from. Preview behaves identically for all three;
/// the tag travels with the request for downstream import bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Csv,
    Excel,
    Ocr,
}

/// An import preview request: rows plus an optional pre-existing schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreviewRequest {
    /// Producer that generated the rows.
    pub source_type: SourceType,
    /// Row records to preview. May be ragged.
    #[serde(default)]
    pub rows: Vec<RowRecord>,
    /// Caller-supplied schema. When present and non-empty, inference is
    /// bypassed entirely.
    #[serde(default)]
    pub schema: Option<Vec<ColumnSchema>>,
}

/// The preview produced for an import request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportPreviewResponse {
    /// Leading rows for display, capped at [`PREVIEW_ROWS`].
    pub sample: Vec<RowRecord>,
    /// Schema: the caller's, or freshly inferred.
    pub schema: Vec<ColumnSchema>,
    /// Human-readable warnings about the import.
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Build an import preview. Infallible: inference never fails, and a
/// request with no rows yields an empty sample and an empty schema.
pub fn preview(request: ImportPreviewRequest) -> ImportPreviewResponse {
    let ImportPreviewRequest { rows, schema, .. } = request;

    let schema = match schema {
        Some(s) if !s.is_empty() => s,
        _ => infer_schema(&rows),
    };

    let mut warnings = Vec::new();
    if rows.len() > LARGE_IMPORT_THRESHOLD {
        warnings.push(format!(
            "Large import detected ({} rows): the preview shows only the first {}.",
            rows.len(),
            PREVIEW_ROWS
        ));
    }

    let sample: Vec<RowRecord> = rows.into_iter().take(PREVIEW_ROWS).collect();

    ImportPreviewResponse {
        sample,
        schema,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn request(rows: Vec<RowRecord>) -> ImportPreviewRequest {
        ImportPreviewRequest {
            source_type: SourceType::Csv,
            rows,
            schema: None,
        }
    }

    fn int_rows(count: usize) -> Vec<RowRecord> {
        (0..count)
            .map(|i| serde_json::from_str(&format!(r#"{{"n": "{i}"}}"#)).unwrap())
            .collect()
    }

    #[test]
    fn test_preview_infers_when_no_schema_given() {
        let response = preview(request(int_rows(3)));
        assert_eq!(response.schema.len(), 1);
        assert_eq!(response.schema[0].column_type, ColumnType::Integer);
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_preview_bypasses_inference_with_caller_schema() {
        let mut req = request(int_rows(3));
        req.schema = Some(vec![ColumnSchema::new("n", ColumnType::String, true, 0.5)]);

        let response = preview(req);
        assert_eq!(response.schema[0].column_type, ColumnType::String);
    }

    #[test]
    fn test_preview_empty_caller_schema_still_infers() {
        let mut req = request(int_rows(3));
        req.schema = Some(Vec::new());

        let response = preview(req);
        assert_eq!(response.schema.len(), 1);
        assert_eq!(response.schema[0].column_type, ColumnType::Integer);
    }

    #[test]
    fn test_preview_sample_is_truncated() {
        let response = preview(request(int_rows(450)));
        assert_eq!(response.sample.len(), PREVIEW_ROWS);
    }

    #[test]
    fn test_preview_warns_on_large_imports() {
        let response = preview(request(int_rows(LARGE_IMPORT_THRESHOLD + 1)));
        assert_eq!(response.warnings.len(), 1);
        assert!(response.warnings[0].contains("Large import"));
    }

    #[test]
    fn test_preview_empty_request() {
        let response = preview(request(Vec::new()));
        assert!(response.sample.is_empty());
        assert!(response.schema.is_empty());
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: ImportPreviewRequest = serde_json::from_str(
            r#"{"sourceType": "ocr", "rows": [{"col1": "a"}]}"#,
        )
        .unwrap();
        assert_eq!(req.source_type, SourceType::Ocr);
        assert_eq!(req.rows.len(), 1);
        assert!(req.schema.is_none());
    }
}
