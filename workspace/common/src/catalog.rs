use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Distribution centers available for forecasting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct CentersResponse {
    pub centers: Vec<String>,
    pub count: usize,
}

impl CentersResponse {
    pub fn new(centers: Vec<String>) -> Self {
        let count = centers.len();
        Self { centers, count }
    }
}

/// Items (SKUs) available for forecasting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct ItemsResponse {
    pub items: Vec<String>,
    pub count: usize,
}

impl ItemsResponse {
    pub fn new(items: Vec<String>) -> Self {
        let count = items.len();
        Self { items, count }
    }
}
