use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use doculens_core::AppError;
use doculens_processing::summarize;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    #[serde(rename = "documentId")]
    pub document_id: Uuid,
    pub title: String,
    pub summary: String,
    #[serde(rename = "sentenceCount")]
    pub sentence_count: usize,
    #[serde(rename = "sourceLength")]
    pub source_length: usize,
}

#[utoipa::path(
    get,
    path = "/documents/{id}/summary",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Summary of the document's extracted text", body = SummaryResponse),
        (status = 400, description = "Document text not available for summarization", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn summarize_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = state
        .documents
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    // A record with no extracted text summarizes the empty string, which
    // fails the length precondition and rejects like any too-short source.
    let text = document.extracted_text.as_deref().unwrap_or("");
    let summary = summarize(text).map_err(HttpAppError::from)?;

    tracing::debug!(
        document_id = %id,
        sentence_count = summary.sentence_count,
        "Summarized document"
    );

    Ok(Json(SummaryResponse {
        document_id: document.id,
        title: document.title,
        summary: summary.text,
        sentence_count: summary.sentence_count,
        source_length: summary.source_length,
    }))
}
