//! Demand models behind a common trait.
//!
//! The API treats a model as an opaque function of the pair's history and
//! the target dates. The built-in [`profile::ProfileModel`] stands in for the
//! pre-trained gradient-boosting artifacts; other implementations can be
//! registered on the engine with [`crate::forecast::ForecastEngine::with_model`].

pub mod profile;
pub mod seasonal;

use chrono::NaiveDate;
use common::ModelKind;
use std::fmt;

use crate::dataset::DailyDemand;
use crate::settings::ModelSettings;

pub use profile::ProfileModel;
pub use seasonal::SeasonalProfile;

/// A demand model producing one value per requested date.
pub trait DemandModel: Send + Sync + fmt::Debug {
    /// The client-facing identifier this model answers to.
    fn kind(&self) -> ModelKind;

    /// Predicts demand for `dates`.
    ///
    /// `history` is the pair's daily demand, date ascending, and may be empty.
    /// The result has the same length as `dates`; values are never negative.
    fn predict(&self, item: &str, history: &[DailyDemand], dates: &[NaiveDate]) -> Vec<f64>;
}

/// Models registered for every [`ModelKind`] with the configured parameters.
pub fn default_models(settings: &ModelSettings) -> Vec<Box<dyn DemandModel>> {
    vec![
        Box::new(ProfileModel::new(ModelKind::XgBoost, settings.xgboost.half_life_days)),
        Box::new(ProfileModel::new(ModelKind::LightGbm, settings.lightgbm.half_life_days)),
    ]
}
