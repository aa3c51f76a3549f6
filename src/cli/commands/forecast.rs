use anyhow::Result;
use common::{ForecastGrid, ModelKind};
use std::path::Path;
use tracing::{info, trace};

use crate::config::{AppConfig, initialize_app_state};

/// Forecasts a grid of centers and items and prints it as JSON.
///
/// Empty `centers` selects every center. Empty `items` selects the items
/// each center has history for.
pub fn forecast(
    config_path: Option<&Path>,
    centers: Vec<String>,
    items: Vec<String>,
    days: u32,
    model: &str,
) -> Result<()> {
    trace!("Entering forecast function");

    let config = AppConfig::load(config_path)?;
    let model: ModelKind = model.parse()?;
    let state = initialize_app_state(&config)?;
    let engine = &state.engine;

    let centers = if centers.is_empty() { engine.centers() } else { centers };
    info!("Forecasting {} centers for {} days", centers.len(), days);

    let grid = if items.is_empty() {
        let mut grid = ForecastGrid::new();
        for center in &centers {
            let own_items = engine.items(Some(center));
            let row = engine.forecast_grid(std::slice::from_ref(center), &own_items, days, model)?;
            grid.extend(row);
        }
        grid
    } else {
        engine.forecast_grid(&centers, &items, days, model)?
    };
    println!("{}", serde_json::to_string_pretty(&grid)?);
    Ok(())
}
