//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use doculens_core::Config;
use doculens_db::{ChatHistoryRepository, DocumentRepository};
use doculens_services::{AnalyticsService, ChatCompletionService};

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    // Initialize telemetry before anything that logs
    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup storage
    let storage = storage::setup_storage(&config).await?;

    // Initialize repositories and services
    let documents = DocumentRepository::new(pool.clone());
    let chat_history = ChatHistoryRepository::new(pool.clone());
    let analytics = AnalyticsService::new(documents.clone());
    let chat = config.hf_api_key.clone().map(|api_key| {
        ChatCompletionService::new(api_key, config.hf_model.clone(), config.hf_api_base.clone())
    });
    if chat.is_none() {
        tracing::warn!("HF_API_KEY not set; chat completion upstream disabled");
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        pool,
        documents,
        chat_history,
        storage,
        analytics,
        chat,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
