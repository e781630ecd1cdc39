//! Route configuration and setup.
//!
//! Domain routes are wired here; health checks live in [health](health).

mod health;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use doculens_core::Config;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api_doc::openapi_spec;
use crate::handlers::{analytics, chat, documents, summary, upload};
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router> {
    let cors = setup_cors(config)?;

    let api_routes = Router::new()
        .route("/", get(service_info))
        .route("/health", get(health::health_check))
        .route("/documents", get(documents::list_documents))
        .route("/documents/upload", post(upload::upload_document))
        .route(
            "/documents/{id}",
            get(documents::get_document)
                .put(documents::update_document)
                .delete(documents::delete_document),
        )
        .route("/documents/{id}/download", get(documents::download_document))
        .route("/documents/{id}/summary", get(summary::summarize_document))
        .route("/chat", get(chat::chat_status).post(chat::send_chat_message))
        .route("/chat/history", get(chat::get_chat_history))
        .route("/analytics/dashboard", get(analytics::get_dashboard_stats))
        .route("/analytics/storage", get(analytics::get_storage_info))
        .with_state(state);

    let rapidoc: Router = utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
        .path("/docs")
        .into();

    let app = api_routes
        .route("/api/openapi.json", get(openapi_spec))
        .merge(rapidoc)
        .nest_service("/uploads", ServeDir::new(&config.storage_path))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(config.max_upload_size_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes))
        .layer(cors);

    Ok(app)
}

/// CORS policy from the configured origins.
fn setup_cors(config: &Config) -> Result<CorsLayer> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}

/// Root endpoint: service identity and endpoint map.
async fn service_info(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "DocuLens Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "port": state.config.server_port,
        "timestamp": Utc::now().to_rfc3339(),
        "endpoints": {
            "health": "/health",
            "documents": "/documents",
            "analytics": "/analytics",
            "chat": "/chat",
            "chatHistory": "/chat/history",
            "uploads": "/uploads",
            "docs": "/docs",
        },
    }))
}
