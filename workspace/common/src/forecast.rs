use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Forecasting model selectable by the client.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, PartialOrd, Ord,
    Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    XgBoost,
    LightGbm,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::XgBoost, ModelKind::LightGbm];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::XgBoost => "xgboost",
            ModelKind::LightGbm => "lightgbm",
        }
    }

    /// Human readable label used by the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::XgBoost => "XGBoost",
            ModelKind::LightGbm => "LightGBM",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModelKindError(pub String);

impl fmt::Display for ParseModelKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported model '{}' (expected one of: xgboost, lightgbm)",
            self.0
        )
    }
}

impl std::error::Error for ParseModelKindError {}

impl FromStr for ModelKind {
    type Err = ParseModelKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xgboost" => Ok(ModelKind::XgBoost),
            "lightgbm" => Ok(ModelKind::LightGbm),
            _ => Err(ParseModelKindError(s.to_string())),
        }
    }
}

/// A single day of forecast demand.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastPoint {
    /// Forecast date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Point forecast, never negative
    pub forecast: f64,
    /// Lower edge of the forecast interval
    pub lower_bound: f64,
    /// Upper edge of the forecast interval
    pub upper_bound: f64,
}

/// Forecast series keyed by center, then by item.
pub type ForecastGrid = BTreeMap<String, BTreeMap<String, Vec<ForecastPoint>>>;

/// Response of the quick forecast endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastResponse {
    pub center: String,
    pub item: String,
    pub forecast_days: u32,
    pub model_used: ModelKind,
    /// Mapping center -> item -> ordered forecast points
    #[schema(value_type = Object)]
    pub forecasts: ForecastGrid,
}

impl ForecastResponse {
    /// Series for the requested (center, item) pair.
    pub fn series(&self) -> &[ForecastPoint] {
        self.forecasts
            .get(&self.center)
            .and_then(|items| items.get(&self.item))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
