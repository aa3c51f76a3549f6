use common::{
    AnalysisSummary, CentersResponse, DatasetOverview, DateRange, ErrorResponse, ForecastPoint,
    ForecastResponse, ItemsResponse, ModelKind, MonthlyDemand, UploadFailure,
};
use compute::analysis::UploadAnalyzer;
use compute::forecast::ForecastEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Forecast engine built from the history dataset at start-up
    pub engine: Arc<ForecastEngine>,
    /// Analyzer for uploaded files
    pub analyzer: Arc<UploadAnalyzer>,
}

impl AppState {
    pub fn new(engine: ForecastEngine, analyzer: UploadAnalyzer) -> Self {
        Self {
            engine: Arc::new(engine),
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Query parameters for the item listing
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ItemsQuery {
    /// Only list items observed at this center
    pub center: Option<String>,
}

/// Query parameters for the quick forecast
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct ForecastQuery {
    /// Distribution center
    pub center: String,
    /// Item to forecast
    pub item: String,
    /// Forecast horizon in days (default: 30, upper limit from configuration)
    #[validate(range(min = 1))]
    pub days: Option<u32>,
    /// Model identifier, `xgboost` or `lightgbm` (default: xgboost)
    pub model: Option<String>,
}

/// Multipart body of the upload endpoints
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    /// CSV file with historical demand
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Months to project, 1-60 (default: 12). Ignored by `/analyze-data`.
    pub forecast_months: Option<u32>,
}

/// Root endpoint response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of history observations loaded at start-up
    pub history_records: usize,
    /// Where the center/item catalog comes from: `history` or `fallback`
    pub catalog_source: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::root,
        crate::handlers::health::health_check,
        crate::handlers::catalog::get_centers,
        crate::handlers::catalog::get_items,
        crate::handlers::forecast::get_forecast,
        crate::handlers::upload::upload_forecast,
        crate::handlers::upload::analyze_data,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            RootResponse,
            ItemsQuery,
            ForecastQuery,
            UploadForm,
            CentersResponse,
            ItemsResponse,
            ForecastResponse,
            ForecastPoint,
            ModelKind,
            AnalysisSummary,
            MonthlyDemand,
            DatasetOverview,
            DateRange,
            UploadFailure,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Center and item listing endpoints"),
        (name = "forecast", description = "Daily demand forecast endpoints"),
        (name = "upload", description = "Uploaded data analysis endpoints"),
    ),
    info(
        title = "Seafood Forecast API",
        description = "Seafood demand forecasting and inventory planning",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
