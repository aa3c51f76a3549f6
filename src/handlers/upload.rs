use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Json,
};
use chrono::Local;
use common::client::UploadOutcome;
use common::{AnalysisSummary, DatasetOverview, ErrorResponse, UploadFailure};
use tracing::{error, info, instrument, trace, warn};

use crate::helpers::errors::{ApiError, api_error};
use crate::helpers::multipart::read_upload_fields;
use crate::schemas::{AppState, UploadForm};

/// Runs CPU-bound analysis off the async workers.
async fn run_blocking<T, F>(job: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(job).await.map_err(|e| {
        error!("Analysis task failed: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "Analysis task failed")
    })
}

/// Project monthly demand from an uploaded CSV
///
/// Analysis failures are reported as `{"error": "..."}` with status 200.
#[utoipa::path(
    post,
    path = "/upload-forecast",
    tag = "upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (
            status = 200,
            description = "Analysis summary, or an `error` field when analysis failed",
            body = AnalysisSummary
        ),
        (
            status = 400,
            description = "Missing or non-CSV file, or invalid forecast_months",
            body = ErrorResponse
        )
    )
)]
#[instrument(skip(state, multipart))]
pub async fn upload_forecast(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadOutcome<AnalysisSummary>>, ApiError> {
    trace!("Entering upload_forecast function");

    let fields = read_upload_fields(multipart).await?;
    let months = fields.forecast_months(state.analyzer.settings().max_months)?;
    let file = fields.csv_file()?;
    info!("Analyzing upload '{}' for a {}-month forecast", file.file_name, months);

    let analyzer = state.analyzer.clone();
    let now = Local::now().naive_local();
    let result = run_blocking(move || analyzer.summarize(file.bytes, months, now)).await?;

    Ok(Json(match result {
        Ok(summary) => UploadOutcome::Done(summary),
        Err(e) => {
            warn!("Upload analysis failed: {}", e);
            UploadOutcome::Failed(UploadFailure::new(format!("Forecast generation failed: {}", e)))
        }
    }))
}

/// Describe the structure of an uploaded CSV
#[utoipa::path(
    post,
    path = "/analyze-data",
    tag = "upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (
            status = 200,
            description = "Dataset overview, or an `error` field when the file could not be read",
            body = DatasetOverview
        ),
        (status = 400, description = "Missing or non-CSV file", body = ErrorResponse)
    )
)]
#[instrument(skip(state, multipart))]
pub async fn analyze_data(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadOutcome<DatasetOverview>>, ApiError> {
    trace!("Entering analyze_data function");

    let file = read_upload_fields(multipart).await?.csv_file()?;
    info!("Inspecting upload '{}'", file.file_name);

    let analyzer = state.analyzer.clone();
    let result = run_blocking(move || analyzer.overview(file.bytes)).await?;

    Ok(Json(match result {
        Ok(overview) => UploadOutcome::Done(overview),
        Err(e) => {
            warn!("Dataset inspection failed: {}", e);
            UploadOutcome::Failed(UploadFailure::new(format!("Error analyzing file: {}", e)))
        }
    }))
}
