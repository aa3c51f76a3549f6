use axum::{extract::State, response::Json};
use compute::catalog::CatalogSource;
use tracing::instrument;

use crate::schemas::{AppState, HealthResponse, RootResponse};

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = RootResponse)
    )
)]
#[instrument]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Seafood AI Forecasting System".to_string(),
        status: "active".to_string(),
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog_source = match state.engine.catalog().source() {
        CatalogSource::History => "history",
        CatalogSource::Fallback => "fallback",
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        history_records: state.engine.history_len(),
        catalog_source: catalog_source.to_string(),
    })
}
