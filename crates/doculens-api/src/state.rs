//! Application state shared across handlers.

use std::sync::Arc;

use doculens_core::Config;
use doculens_db::{ChatHistoryRepository, DocumentRepository};
use doculens_services::{AnalyticsService, ChatCompletionService};
use doculens_storage::Storage;
use sqlx::PgPool;

pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub documents: DocumentRepository,
    pub chat_history: ChatHistoryRepository,
    pub storage: Arc<dyn Storage>,
    pub analytics: AnalyticsService,
    /// Absent when no upstream API key is configured; the chat endpoint
    /// then reports the upstream as unavailable.
    pub chat: Option<ChatCompletionService>,
}
