use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use doculens_core::models::{Document, NewDocument};
use doculens_processing::{detect, extract};
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{extract_multipart_upload, validate_file_size};

#[utoipa::path(
    post,
    path = "/documents/upload",
    tag = "documents",
    responses(
        (status = 201, description = "Document uploaded", body = Document),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let (data, original_filename, metadata) = extract_multipart_upload(multipart).await?;
    validate_file_size(data.len(), state.config.max_upload_size_bytes)?;

    let extension = detect::extension(&original_filename).unwrap_or("");
    let doc_type = extension.to_uppercase();
    let file_size = data.len() as i64;

    tracing::info!(
        filename = %original_filename,
        doc_type = %doc_type,
        size = file_size,
        "Processing document upload"
    );

    // Store the raw bytes under a collision-free name.
    let storage_name = if extension.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        format!("{}.{}", Uuid::new_v4(), extension.to_lowercase())
    };
    let file_url = state
        .storage
        .upload(&storage_name, data.clone())
        .await
        .map_err(HttpAppError::from)?;

    // Extraction is CPU-bound; run it off the async runtime. Any failure
    // yields a record with no text, never a failed upload.
    let filename_for_extraction = original_filename.clone();
    let extracted_text =
        match tokio::task::spawn_blocking(move || extract(&data, &filename_for_extraction)).await {
            Ok(result) => result.into_option(),
            Err(e) => {
                tracing::error!(error = %e, "Extraction task failed");
                None
            }
        };

    if extracted_text.is_none() {
        tracing::warn!(filename = %original_filename, "No text extracted from upload");
    }

    let new_document = NewDocument {
        title: metadata.title.unwrap_or_else(|| original_filename.clone()),
        doc_type,
        category: metadata.category.unwrap_or_else(|| "Other".to_string()),
        status: "pending".to_string(),
        description: metadata.description.unwrap_or_default(),
        file_url,
        file_size,
        project: metadata.project,
        extracted_text,
    };

    let document = match state.documents.create(new_document).await {
        Ok(document) => document,
        Err(e) => {
            // Cleanup storage on database failure
            let storage = state.storage.clone();
            tokio::spawn(async move {
                if let Err(cleanup_err) = storage.delete(&storage_name).await {
                    tracing::warn!(error = %cleanup_err, "Failed to clean up stored file");
                }
            });
            return Err(HttpAppError::from(e));
        }
    };

    tracing::info!(document_id = %document.id, "Document uploaded");
    Ok((StatusCode::CREATED, Json(document)))
}
