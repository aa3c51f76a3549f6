//! Tunables for the compute crate.
//!
//! These structs are deserialized as sections of the application's YAML
//! configuration, so every field has a serde default.

use serde::{Deserialize, Serialize};

/// Column names of the history dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetColumns {
    pub date_column: String,
    pub center_column: String,
    pub item_column: String,
    pub target_column: String,
}

impl Default for DatasetColumns {
    fn default() -> Self {
        Self {
            date_column: "DATE".to_string(),
            center_column: "CENTER NAME".to_string(),
            item_column: "ITEM".to_string(),
            target_column: "PAY WEIGHT".to_string(),
        }
    }
}

/// Centers and items offered when no history dataset is loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogSettings {
    pub centers: Vec<String>,
    pub items: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            centers: ["KASARA", "TALOJA", "ALIBAG", "UTTAN", "VASAI"]
                .into_iter()
                .map(String::from)
                .collect(),
            items: ["CHILAPI", "MIX FISH", "PRAWN HEAD AND SHEL", "MUNDI", "BOMBIL"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForecastSettings {
    /// Horizon used when the client does not send one
    pub default_days: u32,
    /// Largest accepted horizon in days
    pub max_days: u32,
    /// Relative half-width of the forecast interval
    pub interval_width: f64,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            default_days: 30,
            max_days: 365,
            interval_width: 0.15,
        }
    }
}

/// Parameters of the built-in profile model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ProfileModelSettings {
    /// Observations this many days older than the latest weigh half as much.
    /// `None` weighs the whole history equally.
    pub half_life_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModelSettings {
    pub xgboost: ProfileModelSettings,
    pub lightgbm: ProfileModelSettings,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            xgboost: ProfileModelSettings::default(),
            lightgbm: ProfileModelSettings {
                half_life_days: Some(28.0),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Extra stock held on top of the busiest projected month
    pub safety_stock_ratio: f64,
    /// Unit reported with demand figures
    pub unit: String,
    /// Largest accepted horizon in months
    pub max_months: u32,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            safety_stock_ratio: 0.2,
            unit: "kg".to_string(),
            max_months: 60,
        }
    }
}

/// Everything the forecast engine needs besides the data itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EngineSettings {
    pub catalog: CatalogSettings,
    pub forecast: ForecastSettings,
    pub models: ModelSettings,
}
