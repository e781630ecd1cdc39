use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role of the author of a chat message.
pub const ROLE_USER: &str = "user";
pub const ROLE_BOT: &str = "bot";

/// One persisted chat message, optionally tied to a document.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ChatMessage {
    pub id: Uuid,
    pub document_id: Option<Uuid>,
    pub role: String,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendChatRequest {
    pub message: String,
    #[serde(rename = "documentId")]
    pub document_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatSendResponse {
    pub success: bool,
    #[serde(rename = "userMessage")]
    pub user_message: ChatMessage,
    #[serde(rename = "botMessage")]
    pub bot_message: ChatMessage,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatHistoryResponse {
    pub success: bool,
    pub history: Vec<ChatMessage>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_serializes_timestamp() {
        let message = ChatMessage {
            id: Uuid::new_v4(),
            document_id: None,
            role: ROLE_USER.to_string(),
            content: "What is this document about?".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("timestamp").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_send_chat_request_accepts_camel_case() {
        let request: SendChatRequest = serde_json::from_str(
            r#"{"message": "hello", "documentId": "8ec7cac3-7907-4a19-bd69-cf2ef5b7ed5d"}"#,
        )
        .unwrap();
        assert_eq!(request.message, "hello");
        assert!(request.document_id.is_some());
    }

    #[test]
    fn test_send_chat_request_document_id_optional() {
        let request: SendChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert!(request.document_id.is_none());
    }
}
