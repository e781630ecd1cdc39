use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use doculens_core::models::chat::{ROLE_BOT, ROLE_USER};
use doculens_core::models::{ChatHistoryResponse, ChatSendResponse, SendChatRequest};
use doculens_core::AppError;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/chat",
    tag = "chat",
    responses((status = 200, description = "Chat API status"))
)]
pub async fn chat_status() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Chat API is working",
        "status": "ok",
    }))
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = SendChatRequest,
    responses(
        (status = 200, description = "User and bot messages", body = ChatSendResponse),
        (status = 400, description = "Message is required", body = ErrorResponse),
        (status = 502, description = "Chat upstream failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn send_chat_message(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SendChatRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()).into());
    }

    let user_message = state
        .chat_history
        .insert(request.document_id, ROLE_USER, &request.message)
        .await?;

    let chat = state.chat.as_ref().ok_or_else(|| {
        AppError::ChatUpstream("chat completion upstream is not configured".to_string())
    })?;
    let reply = chat.complete(&request.message).await?;

    tracing::debug!(
        preview = %reply.chars().take(100).collect::<String>(),
        "Bot reply"
    );

    let bot_message = state
        .chat_history
        .insert(request.document_id, ROLE_BOT, &reply)
        .await?;

    Ok(Json(ChatSendResponse {
        success: true,
        user_message,
        bot_message,
    }))
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ChatHistoryQuery {
    #[serde(rename = "documentId")]
    pub document_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/chat/history",
    tag = "chat",
    params(ChatHistoryQuery),
    responses(
        (status = 200, description = "Chat history, oldest first", body = ChatHistoryResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_chat_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChatHistoryQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let history = state.chat_history.list(query.document_id).await?;

    Ok(Json(ChatHistoryResponse {
        success: true,
        count: history.len(),
        history,
    }))
}
