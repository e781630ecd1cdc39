use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use doculens_core::models::{DashboardStats, StorageSummary};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/analytics/dashboard",
    tag = "analytics",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_dashboard_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let stats = state.analytics.dashboard().await.map_err(HttpAppError::from)?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/analytics/storage",
    tag = "analytics",
    responses(
        (status = 200, description = "Storage usage summary", body = StorageSummary),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_storage_info(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let summary = state.analytics.storage().await.map_err(HttpAppError::from)?;
    Ok(Json(summary))
}
