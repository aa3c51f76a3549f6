use crate::handlers::{
    catalog::{get_centers, get_items},
    forecast::get_forecast,
    health::{health_check, root},
    upload::{analyze_data, upload_forecast},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Limits applied to every request
#[derive(Debug, Clone, Copy)]
pub struct RouterLimits {
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
}

impl Default for RouterLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_body_bytes: 50 * 1024 * 1024,
        }
    }
}

/// Create application router with all routes and middleware
pub fn create_router(state: AppState, limits: RouterLimits) -> Router {
    Router::new()
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // Selection listing
        .route("/centers", get(get_centers))
        .route("/items", get(get_items))
        // Quick forecast
        .route("/forecast", get(get_forecast))
        // Upload analysis
        .route("/upload-forecast", post(upload_forecast))
        .route("/analyze-data", post(analyze_data))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(limits.request_timeout))
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(limits.max_body_bytes)),
        )
        .with_state(state)
}
