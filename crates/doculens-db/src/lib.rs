//! Database repositories for the data access layer.
//!
//! Each repository wraps the shared `PgPool` and owns the queries for one
//! domain entity. Domain models come from `doculens-core`; nothing here
//! leaks SQL types to callers.

pub mod chat;
pub mod documents;

pub use chat::ChatHistoryRepository;
pub use documents::{DocumentFilter, DocumentRepository};
