//! Document parameter extraction handlers

use axum::{extract::Multipart, Json};

use crate::error::{AppError, AppResult};
use crate::services::extraction::{ExtractionOutcome, ExtractionService};

/// Extract prediction parameters from an uploaded PDF document.
///
/// Expects a multipart form with a `file` field holding the PDF bytes.
/// Always succeeds for a well-formed upload: a document no text or
/// parameters can be recovered from yields an empty record and a
/// baseline prefill.
pub async fn extract_from_document(
    mut multipart: Multipart,
) -> AppResult<Json<ExtractionOutcome>> {
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::ValidationError(format!("Failed to read upload: {}", e)))?;
            file_bytes = Some(bytes.to_vec());
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| AppError::ValidationError("Missing 'file' field in upload".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::ValidationError(
            "Uploaded file is empty".to_string(),
        ));
    }

    tracing::info!(size = bytes.len(), "Processing uploaded document");

    let outcome = ExtractionService::new().extract_from_pdf(&bytes);

    Ok(Json(outcome))
}
