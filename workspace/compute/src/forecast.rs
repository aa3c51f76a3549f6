use chrono::{Duration, NaiveDate, Utc};
use common::{ForecastGrid, ForecastPoint, ModelKind};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::dataset::HistoryDataset;
use crate::error::{ComputeError, Result};
use crate::model::{DemandModel, default_models};
use crate::settings::{EngineSettings, ForecastSettings};
use crate::utils::round2;

/// Produces per-day forecasts for (center, item) pairs.
///
/// Holds the history, the catalog derived from it and one model per
/// [`ModelKind`]. Immutable once built, so it can be shared across requests.
#[derive(Debug)]
pub struct ForecastEngine {
    dataset: HistoryDataset,
    catalog: Catalog,
    models: BTreeMap<ModelKind, Box<dyn DemandModel>>,
    settings: ForecastSettings,
    today: Option<NaiveDate>,
}

impl ForecastEngine {
    /// Builds an engine with the default models.
    ///
    /// `today` pins the forecast origin; `None` uses the current UTC date on
    /// every call.
    pub fn new(
        dataset: HistoryDataset,
        settings: &EngineSettings,
        today: Option<NaiveDate>,
    ) -> Self {
        let catalog = Catalog::new(&dataset, &settings.catalog);
        let models = default_models(&settings.models)
            .into_iter()
            .map(|model| (model.kind(), model))
            .collect();

        Self {
            dataset,
            catalog,
            models,
            settings: settings.forecast.clone(),
            today,
        }
    }

    /// Registers `model`, replacing any model of the same kind.
    pub fn with_model(mut self, model: Box<dyn DemandModel>) -> Self {
        self.models.insert(model.kind(), model);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &ForecastSettings {
        &self.settings
    }

    pub fn centers(&self) -> Vec<String> {
        self.catalog.centers().to_vec()
    }

    pub fn items(&self, center: Option<&str>) -> Vec<String> {
        self.catalog.items(center)
    }

    /// Number of history observations the engine was built from.
    pub fn history_len(&self) -> usize {
        self.dataset.len()
    }

    pub fn models(&self) -> impl Iterator<Item = ModelKind> + '_ {
        self.models.keys().copied()
    }

    /// Forecast for one pair over the next `days` days.
    ///
    /// Points start the day after [`Self::today`] and are date ascending.
    #[instrument(skip(self))]
    pub fn forecast(
        &self,
        center: &str,
        item: &str,
        days: u32,
        model: ModelKind,
    ) -> Result<Vec<ForecastPoint>> {
        let model = self.resolve(center, item, days, model)?;
        Ok(self.run(model, center, item, days))
    }

    /// Forecasts for every combination of `centers` and `items`.
    ///
    /// All pairs are validated before anything is computed.
    #[instrument(skip(self))]
    pub fn forecast_grid(
        &self,
        centers: &[String],
        items: &[String],
        days: u32,
        model: ModelKind,
    ) -> Result<ForecastGrid> {
        let mut resolved = None;
        for center in centers {
            for item in items {
                resolved = Some(self.resolve(center, item, days, model)?);
            }
        }
        let Some(model) = resolved else {
            return Ok(ForecastGrid::new());
        };

        let mut grid = ForecastGrid::new();
        for center in centers {
            let row = grid.entry(center.clone()).or_default();
            for item in items {
                row.insert(item.clone(), self.run(model, center, item, days));
            }
        }
        debug!("Computed forecast grid of {} x {} series", centers.len(), items.len());
        Ok(grid)
    }

    fn resolve(
        &self,
        center: &str,
        item: &str,
        days: u32,
        model: ModelKind,
    ) -> Result<&dyn DemandModel> {
        if days == 0 || days > self.settings.max_days {
            return Err(ComputeError::InvalidHorizon(format!(
                "days must be between 1 and {}, got {}",
                self.settings.max_days, days
            )));
        }
        let model = self
            .models
            .get(&model)
            .ok_or(ComputeError::UnsupportedModel(model))?;
        if !self.catalog.contains_center(center) {
            return Err(ComputeError::UnknownCenter(center.to_string()));
        }
        if !self.catalog.contains_item(item) {
            return Err(ComputeError::UnknownItem(item.to_string()));
        }
        if !self.catalog.contains_pair(center, item) {
            return Err(ComputeError::UnknownItem(format!("{item} at {center}")));
        }
        Ok(model.as_ref())
    }

    fn run(
        &self,
        model: &dyn DemandModel,
        center: &str,
        item: &str,
        days: u32,
    ) -> Vec<ForecastPoint> {
        let today = self.today();
        let dates: Vec<NaiveDate> = (1..=days as i64)
            .map(|offset| today + Duration::days(offset))
            .collect();
        let history = self.dataset.daily_series(center, item);
        let values = model.predict(item, history, &dates);
        let width = self.settings.interval_width;

        dates
            .into_iter()
            .zip(values)
            .map(|(date, value)| {
                let forecast = round2(value.max(0.0));
                ForecastPoint {
                    date,
                    forecast,
                    lower_bound: round2(forecast * (1.0 - width)),
                    upper_bound: round2(forecast * (1.0 + width)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DailyDemand, Observation};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn fallback_engine() -> ForecastEngine {
        ForecastEngine::new(HistoryDataset::empty(), &EngineSettings::default(), Some(today()))
    }

    fn engine_with_history() -> ForecastEngine {
        let observations = (0..28).map(|offset| Observation {
            date: today() - Duration::days(28 - offset),
            center: "VASAI".into(),
            item: "MUNDI".into(),
            quantity: 40.0 + offset as f64,
        });
        ForecastEngine::new(
            HistoryDataset::from_observations(observations),
            &EngineSettings::default(),
            Some(today()),
        )
    }

    #[test]
    fn forecast_has_requested_length_and_order() {
        let engine = engine_with_history();
        let points = engine.forecast("VASAI", "MUNDI", 30, ModelKind::XgBoost).unwrap();

        assert_eq!(points.len(), 30);
        assert_eq!(points[0].date, today() + Duration::days(1));
        assert!(points.windows(2).all(|w| w[0].date < w[1].date));
        for p in &points {
            assert!(p.forecast >= 0.0);
            assert!(p.lower_bound <= p.forecast && p.forecast <= p.upper_bound);
        }
    }

    #[test]
    fn bounds_follow_interval_width() {
        let engine = fallback_engine();
        // 2025-03-11 is a Tuesday, first step of the CHILAPI profile
        let points = engine.forecast("KASARA", "CHILAPI", 1, ModelKind::LightGbm).unwrap();
        assert_eq!(points[0].forecast, 1500.0);
        assert_eq!(points[0].lower_bound, 1275.0);
        assert_eq!(points[0].upper_bound, 1725.0);
    }

    #[test]
    fn unknown_pairs_and_bad_horizons_are_rejected() {
        let engine = engine_with_history();
        assert!(matches!(
            engine.forecast("NOWHERE", "MUNDI", 7, ModelKind::XgBoost),
            Err(ComputeError::UnknownCenter(_))
        ));
        assert!(matches!(
            engine.forecast("VASAI", "TUNA", 7, ModelKind::XgBoost),
            Err(ComputeError::UnknownItem(_))
        ));
        assert!(matches!(
            engine.forecast("VASAI", "MUNDI", 0, ModelKind::XgBoost),
            Err(ComputeError::InvalidHorizon(_))
        ));
        assert!(matches!(
            engine.forecast("VASAI", "MUNDI", 366, ModelKind::XgBoost),
            Err(ComputeError::InvalidHorizon(_))
        ));
    }

    #[test]
    fn items_never_sold_at_a_center_are_rejected() {
        let pairs = [("VASAI", "MUNDI"), ("UTTAN", "BOMBIL")];
        let observations = pairs.map(|(center, item)| Observation {
            date: today() - Duration::days(1),
            center: center.into(),
            item: item.into(),
            quantity: 10.0,
        });
        let engine = ForecastEngine::new(
            HistoryDataset::from_observations(observations),
            &EngineSettings::default(),
            Some(today()),
        );

        assert_eq!(engine.items(Some("VASAI")), vec!["MUNDI"]);
        assert!(engine.forecast("VASAI", "MUNDI", 3, ModelKind::XgBoost).is_ok());
        assert!(matches!(
            engine.forecast("VASAI", "BOMBIL", 3, ModelKind::XgBoost),
            Err(ComputeError::UnknownItem(_))
        ));

        let centers = vec!["VASAI".to_string(), "UTTAN".to_string()];
        let items = vec!["MUNDI".to_string()];
        assert!(engine.forecast_grid(&centers, &items, 3, ModelKind::XgBoost).is_err());
    }

    #[test]
    fn forecasts_are_repeatable() {
        let engine = engine_with_history();
        let first = engine.forecast("VASAI", "MUNDI", 14, ModelKind::LightGbm).unwrap();
        let second = engine.forecast("VASAI", "MUNDI", 14, ModelKind::LightGbm).unwrap();
        assert_eq!(first, second);
    }

    #[derive(Debug)]
    struct Constant(f64);

    impl DemandModel for Constant {
        fn kind(&self) -> ModelKind {
            ModelKind::XgBoost
        }

        fn predict(&self, _item: &str, _history: &[DailyDemand], dates: &[NaiveDate]) -> Vec<f64> {
            vec![self.0; dates.len()]
        }
    }

    #[test]
    fn custom_models_replace_defaults_and_are_clamped() {
        let engine = engine_with_history().with_model(Box::new(Constant(-5.0)));
        let points = engine.forecast("VASAI", "MUNDI", 3, ModelKind::XgBoost).unwrap();
        assert!(points.iter().all(|p| p.forecast == 0.0 && p.upper_bound == 0.0));
    }

    #[test]
    fn grid_covers_every_pair() {
        let engine = fallback_engine();
        let centers = vec!["KASARA".to_string(), "UTTAN".to_string()];
        let items = vec!["MUNDI".to_string(), "BOMBIL".to_string()];
        let grid = engine.forecast_grid(&centers, &items, 5, ModelKind::XgBoost).unwrap();

        assert_eq!(grid.len(), 2);
        assert_eq!(grid["UTTAN"]["BOMBIL"].len(), 5);

        let bad = vec!["NOWHERE".to_string()];
        assert!(engine.forecast_grid(&bad, &items, 5, ModelKind::XgBoost).is_err());
    }
}
