//! OpenAPI documentation.

use axum::Json;
use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "DocuLens API",
        version = "0.1.0",
        description = "Document management API: upload PDF/DOCX/TXT files, extract and summarize their text, chat about a document, and read dashboard analytics."
    ),
    paths(
        // Documents
        handlers::upload::upload_document,
        handlers::documents::list_documents,
        handlers::documents::get_document,
        handlers::documents::update_document,
        handlers::documents::delete_document,
        handlers::documents::download_document,
        handlers::summary::summarize_document,
        // Chat
        handlers::chat::chat_status,
        handlers::chat::send_chat_message,
        handlers::chat::get_chat_history,
        // Analytics
        handlers::analytics::get_dashboard_stats,
        handlers::analytics::get_storage_info,
    ),
    components(schemas(
        doculens_core::models::Document,
        doculens_core::models::DocumentListResponse,
        doculens_core::models::UpdateDocument,
        doculens_core::models::ChatMessage,
        doculens_core::models::SendChatRequest,
        doculens_core::models::ChatSendResponse,
        doculens_core::models::ChatHistoryResponse,
        doculens_core::models::DashboardStats,
        doculens_core::models::RecentDocumentEntry,
        doculens_core::models::ActivityEntry,
        doculens_core::models::StorageSummary,
        handlers::summary::SummaryResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "documents", description = "Document upload and management"),
        (name = "chat", description = "Document chatbot"),
        (name = "analytics", description = "Dashboard and storage analytics"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI spec as JSON.
pub async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
