//! HTTP request handlers.

pub mod analytics;
pub mod chat;
pub mod documents;
pub mod summary;
pub mod upload;
