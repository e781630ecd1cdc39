use doculens_core::models::ChatMessage;
use doculens_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for the `chat_history` table.
#[derive(Clone)]
pub struct ChatHistoryRepository {
    pool: PgPool,
}

impl ChatHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        document_id: Option<Uuid>,
        role: &str,
        content: &str,
    ) -> Result<ChatMessage, AppError> {
        let message = sqlx::query_as::<_, ChatMessage>(
            r#"
            INSERT INTO chat_history (document_id, role, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(document_id)
        .bind(role)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(message)
    }

    /// Messages oldest-first, optionally scoped to one document.
    pub async fn list(&self, document_id: Option<Uuid>) -> Result<Vec<ChatMessage>, AppError> {
        let messages = match document_id {
            Some(id) => {
                sqlx::query_as::<_, ChatMessage>(
                    "SELECT * FROM chat_history WHERE document_id = $1 ORDER BY created_at ASC",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ChatMessage>(
                    "SELECT * FROM chat_history ORDER BY created_at ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(messages)
    }
}
