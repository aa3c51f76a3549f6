use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Projected demand for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlyDemand {
    /// Month in `YYYY-MM` form
    pub month: String,
    pub demand: f64,
}

/// Summary produced from an uploaded demand history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalysisSummary {
    pub status: String,
    /// Narrative shown to the user
    pub message: String,
    /// Forecast horizon in months
    pub total_months: u32,
    /// Generation timestamp (`YYYY-MM-DD HH:MM:SS`)
    pub forecast_generated: String,
    /// Total projected demand over the horizon
    pub estimated_demand: f64,
    /// Stock level to hold for the busiest projected month
    pub recommended_inventory: f64,
    /// Unit of the demand figures (e.g. "kg")
    pub unit: String,
    /// Busiest calendar window, e.g. "Dec-Feb"
    pub peak_season: String,
    /// Growth label, e.g. "+12.5% YoY"
    pub growth_trend: String,
    /// Growth as a fraction (0.125 for +12.5%)
    pub growth_rate: f64,
    pub records_analyzed: usize,
    pub monthly_forecast: Vec<MonthlyDemand>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Structural overview of an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DatasetOverview {
    pub total_records: usize,
    pub columns: Vec<String>,
    pub date_range: Option<DateRange>,
    pub centers: Vec<String>,
    pub products: Vec<String>,
    pub total_demand: f64,
    pub recommendations: Vec<String>,
}

/// Analysis failure reported inside a successful HTTP response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UploadFailure {
    pub error: String,
}

impl UploadFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
