pub mod analysis;
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod forecast;
pub mod frame;
pub mod model;
pub mod settings;
pub mod utils;

use chrono::NaiveDate;
use dataset::HistoryDataset;
use forecast::ForecastEngine;
use settings::EngineSettings;

/// Returns a default pre-configured engine that will be used most of the time.
///
/// Uses the built-in models with their default parameters and the default
/// fallback catalog. `today` pins the forecast origin, `None` follows the
/// current date.
pub fn default_engine(dataset: HistoryDataset, today: Option<NaiveDate>) -> ForecastEngine {
    ForecastEngine::new(dataset, &EngineSettings::default(), today)
}
