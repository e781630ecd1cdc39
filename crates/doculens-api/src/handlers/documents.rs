use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use doculens_core::models::{Document, DocumentListResponse, UpdateDocument};
use doculens_core::AppError;
use doculens_db::DocumentFilter;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::content_type_for;

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct DocumentListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub category: Option<String>,
    pub query: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

#[utoipa::path(
    get,
    path = "/documents",
    tag = "documents",
    params(DocumentListQuery),
    responses(
        (status = 200, description = "Paginated list of documents", body = DocumentListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocumentListQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    // Enforce sane bounds to prevent abuse
    let limit = query.limit.clamp(1, 100);
    let page = query.page.max(1);
    let offset = (page - 1) * limit;

    let filter = DocumentFilter {
        status: query.status,
        doc_type: query.doc_type,
        category: query.category,
        query: query.query,
    };

    let total = state.documents.count(&filter).await?;
    let documents = state.documents.list(&filter, limit, offset).await?;
    let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

    Ok(Json(DocumentListResponse {
        documents,
        total,
        page,
        limit,
        total_pages,
    }))
}

#[utoipa::path(
    get,
    path = "/documents/{id}",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document found", body = Document),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = state
        .documents
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    Ok(Json(document))
}

#[utoipa::path(
    put,
    path = "/documents/{id}",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    request_body = UpdateDocument,
    responses(
        (status = 200, description = "Updated document", body = Document),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(update): Json<UpdateDocument>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = state
        .documents
        .update(id, &update)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    Ok(Json(document))
}

#[utoipa::path(
    delete,
    path = "/documents/{id}",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document deleted"),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = state
        .documents
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    let deleted = state.documents.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Document not found".to_string()).into());
    }

    // Best-effort storage cleanup; the record removal wins.
    if let Some(key) = document.storage_filename() {
        if let Err(e) = state.storage.delete(key).await {
            tracing::warn!(document_id = %id, key = %key, error = %e, "Failed to delete stored file");
        }
    }

    tracing::info!(document_id = %id, "Document deleted");
    Ok(Json(
        serde_json::json!({ "message": "Document deleted successfully" }),
    ))
}

#[utoipa::path(
    get,
    path = "/documents/{id}/download",
    tag = "documents",
    params(("id" = Uuid, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document file content"),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = state
        .documents
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    let key = document
        .storage_filename()
        .ok_or_else(|| AppError::Internal(format!("Malformed file_url: {}", document.file_url)))?;

    let data = state.storage.download(key).await.map_err(HttpAppError::from)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        document.title.replace(['"', '\r', '\n'], "_")
    );

    Ok((
        [
            (header::CONTENT_TYPE, content_type_for(&document.doc_type).to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        data,
    ))
}
