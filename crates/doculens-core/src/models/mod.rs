//! Domain models shared across DocuLens components.

pub mod analytics;
pub mod chat;
pub mod document;
pub mod summary;

pub use analytics::{ActivityEntry, DashboardStats, RecentDocumentEntry, StorageSummary};
pub use chat::{ChatHistoryResponse, ChatMessage, ChatSendResponse, SendChatRequest};
pub use document::{Document, DocumentListResponse, NewDocument, UpdateDocument};
pub use summary::Summary;
