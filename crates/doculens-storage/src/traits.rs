//! Storage abstraction trait
//!
//! This module defines the Storage trait that storage backends must implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends store uploaded document bytes under a caller-chosen key and
/// serve them back for download. Keys are bare filenames; backends reject
/// keys that would escape their root.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key` and return the public URL of the file.
    async fn upload(&self, key: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Download a file by its storage key.
    async fn download(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Delete a file by its storage key.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check if a file exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}
