//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the dashboard can deserialize API responses without duplicating shapes.
//!
//! The `client` module holds the browser-independent parts of the dashboard:
//! upload validation, the six-line CSV preview and the notification/loading
//! view-state handles.

mod analysis;
mod catalog;
pub mod client;
mod forecast;

pub use analysis::{AnalysisSummary, DatasetOverview, DateRange, MonthlyDemand, UploadFailure};
pub use catalog::{CentersResponse, ItemsResponse};
pub use forecast::{ForecastGrid, ForecastPoint, ForecastResponse, ModelKind, ParseModelKindError};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by the API for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}
