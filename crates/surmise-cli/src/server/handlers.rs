//! API request handlers.
//!
//! Both endpoints wrap pure library calls; the only failure mode is a
//! malformed request payload.

use axum::Json;
use serde::Serialize;
use surmise::{ImportPreviewRequest, ImportPreviewResponse, RowRecord, preview, rows_from_text};

use super::error::ApiError;

/// Response for the row-extraction endpoint.
#[derive(Serialize)]
pub struct ExtractRowsResponse {
    /// The text the rows were extracted from, trimmed.
    pub text: String,
    /// Extracted row records, or null when no table-like lines exist.
    pub rows: Option<Vec<RowRecord>>,
}

/// Build an import preview from posted rows.
///
/// The payload is deserialized manually so that shape errors (rows that
/// are not mappings, unknown source types) surface as a structured 400
/// body rather than a bare rejection.
pub async fn import_preview(
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ImportPreviewResponse>, ApiError> {
    let request: ImportPreviewRequest = serde_json::from_value(payload)
        .map_err(|e| ApiError::BadRequest(format!("invalid preview request: {}", e)))?;

    Ok(Json(preview(request)))
}

/// Split posted plain text into table-like row records.
pub async fn extract_rows(text: String) -> Json<ExtractRowsResponse> {
    let rows = rows_from_text(&text);

    Json(ExtractRowsResponse {
        text: text.trim().to_string(),
        rows: if rows.is_empty() { None } else { Some(rows) },
    })
}
