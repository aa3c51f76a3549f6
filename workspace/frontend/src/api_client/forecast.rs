use common::{ForecastResponse, ModelKind};
use serde::Deserialize;
use crate::api_client;

/// Subset of `/health` shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub version: String,
    pub history_records: usize,
    pub catalog_source: String,
}

pub async fn get_health() -> Result<ServiceHealth, String> {
    api_client::get("/health").await
}

pub async fn get_forecast(center: &str, item: &str, days: u32, model: ModelKind) -> Result<ForecastResponse, String> {
    log::debug!("Requesting {}-day {} forecast for {} / {}", days, model.as_str(), center, item);
    let endpoint = format!(
        "/forecast?center={}&item={}&days={}&model={}",
        api_client::encode(center),
        api_client::encode(item),
        days,
        model.as_str()
    );
    api_client::get(&endpoint).await
}
