//! DocuLens Services Library
//!
//! External and cross-cutting services: the chat-completion upstream client
//! and dashboard/storage analytics aggregation.

pub mod analytics;
pub mod chat_completion;

pub use analytics::AnalyticsService;
pub use chat_completion::ChatCompletionService;
