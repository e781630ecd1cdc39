//! Storage backend setup

use std::sync::Arc;

use anyhow::{Context, Result};
use doculens_core::Config;
use doculens_storage::{LocalStorage, Storage};

/// Create the storage backend for uploaded files.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(&config.storage_path, config.storage_base_url.clone())
        .await
        .context("Failed to initialize local storage")?;

    tracing::info!(path = %config.storage_path, "Local storage ready");
    Ok(Arc::new(storage))
}
