use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{ErrorResponse, ForecastGrid, ForecastResponse, ModelKind};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, trace};

use crate::helpers::errors::{ApiError, api_error, compute_error};
use crate::schemas::{AppState, ForecastQuery};

/// Daily forecast for one center and item
#[utoipa::path(
    get,
    path = "/forecast",
    tag = "forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast generated", body = ForecastResponse),
        (status = 400, description = "Invalid horizon or unsupported model", body = ErrorResponse),
        (status = 404, description = "Unknown center or item", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(
    State(state): State<AppState>,
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
) -> Result<Json<ForecastResponse>, ApiError> {
    trace!("Entering get_forecast function");

    let model = match query.model.as_deref() {
        Some(raw) => raw
            .parse::<ModelKind>()
            .map_err(|e| api_error(StatusCode::BAD_REQUEST, "UNSUPPORTED_MODEL", e.to_string()))?,
        None => ModelKind::default(),
    };
    let days = query.days.unwrap_or(state.engine.settings().default_days);
    debug!("Forecasting {} / {} for {} days with {}", query.center, query.item, days, model);

    let points = state
        .engine
        .forecast(&query.center, &query.item, days, model)
        .map_err(compute_error)?;

    info!("Generated {} forecast points for {} / {}", points.len(), query.center, query.item);

    let mut forecasts = ForecastGrid::new();
    forecasts.insert(query.center.clone(), BTreeMap::from([(query.item.clone(), points)]));

    Ok(Json(ForecastResponse {
        center: query.center,
        item: query.item,
        forecast_days: days,
        model_used: model,
        forecasts,
    }))
}
