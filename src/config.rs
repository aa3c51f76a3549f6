use compute::analysis::UploadAnalyzer;
use compute::dataset::HistoryDataset;
use compute::forecast::ForecastEngine;
use compute::settings::{
    AnalysisSettings, CatalogSettings, DatasetColumns, EngineSettings, ForecastSettings,
    ModelSettings,
};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::router::RouterLimits;
use crate::schemas::AppState;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";
const ENV_PREFIX: &str = "SEAFOOD";

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// HTTP listeners and request limits
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address of the API, `IP:PORT`
    #[validate(length(min = 1))]
    pub api_bind: String,
    /// Bind address of the dashboard, `IP:PORT`
    #[validate(length(min = 1))]
    pub dashboard_bind: String,
    /// Directory holding the built dashboard bundle
    pub dashboard_dir: PathBuf,
    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,
    /// Largest accepted request body, uploads included
    #[validate(range(min = 1024))]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_bind: "0.0.0.0:8000".to_string(),
            dashboard_bind: "0.0.0.0:8501".to_string(),
            dashboard_dir: PathBuf::from("workspace/frontend/dist"),
            request_timeout_secs: 30,
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

/// Where the history dataset lives and how its columns are named
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataConfig {
    pub history_path: PathBuf,
    pub columns: DatasetColumns,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from("data/history.csv"),
            columns: DatasetColumns::default(),
        }
    }
}

/// Application configuration, read from YAML and `SEAFOOD__SECTION__KEY`
/// environment variables.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub data: DataConfig,
    pub catalog: CatalogSettings,
    pub forecast: ForecastSettings,
    pub models: ModelSettings,
    pub analysis: AnalysisSettings,
}

impl AppConfig {
    /// Loads configuration from `path` (or [`DEFAULT_CONFIG_PATH`]) layered
    /// with environment variables.
    ///
    /// An explicitly given file must exist; the default one is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, AppConfigError> {
        let (file, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };
        info!("Loading configuration from {}", file.display());

        let config = Config::builder()
            .add_source(File::from(file.as_path()).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, AppConfigError> {
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate().map_err(|e| {
            error!("Configuration validation failed: {:?}", e);
            AppConfigError::Validation(e)
        })?;
        app_config.validate_additional_constraints().map_err(|e| {
            error!("Configuration validation failed: {:?}", e);
            AppConfigError::Validation(e)
        })?;

        debug!(?app_config, "Configuration loaded");
        Ok(app_config)
    }

    /// Checks the compute sections, which carry no validation attributes.
    fn validate_additional_constraints(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.forecast.max_days == 0 {
            errors.add("forecast", ValidationError::new("max_days_must_be_positive"));
        }
        if self.forecast.default_days == 0 || self.forecast.default_days > self.forecast.max_days {
            errors.add("forecast", ValidationError::new("default_days_out_of_range"));
        }
        if !(0.0..1.0).contains(&self.forecast.interval_width) {
            errors.add("forecast", ValidationError::new("interval_width_out_of_range"));
        }
        for half_life in [self.models.xgboost.half_life_days, self.models.lightgbm.half_life_days]
            .into_iter()
            .flatten()
        {
            if half_life <= 0.0 {
                errors.add("models", ValidationError::new("half_life_must_be_positive"));
            }
        }
        if self.analysis.safety_stock_ratio < 0.0 {
            errors.add("analysis", ValidationError::new("negative_safety_stock_ratio"));
        }
        if self.analysis.max_months == 0 {
            errors.add("analysis", ValidationError::new("max_months_must_be_positive"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            catalog: self.catalog.clone(),
            forecast: self.forecast.clone(),
            models: self.models.clone(),
        }
    }

    pub fn router_limits(&self) -> RouterLimits {
        RouterLimits {
            request_timeout: Duration::from_secs(self.server.request_timeout_secs),
            max_body_bytes: self.server.max_upload_bytes,
        }
    }
}

/// Loads the history dataset and builds the shared handler state.
pub fn initialize_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let dataset = HistoryDataset::load(&config.data.history_path, &config.data.columns)?;
    let engine = ForecastEngine::new(dataset, &config.engine_settings(), None);
    info!(
        "Forecast engine ready: {} centers, {} items",
        engine.centers().len(),
        engine.items(None).len()
    );
    Ok(AppState::new(engine, UploadAnalyzer::new(config.analysis.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_yaml(yaml: &str) -> Result<AppConfig, AppConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?;
        AppConfig::from_config(config)
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = from_yaml("").unwrap();
        assert_eq!(config.server.api_bind, "0.0.0.0:8000");
        assert_eq!(config.server.dashboard_bind, "0.0.0.0:8501");
        assert_eq!(config.forecast.default_days, 30);
        assert_eq!(config.models.lightgbm.half_life_days, Some(28.0));
        assert_eq!(config.catalog.centers.len(), 5);
    }

    #[test]
    fn sections_override_defaults() {
        let yaml = r#"
server:
  api_bind: "127.0.0.1:9000"
data:
  history_path: "fixtures/history.csv"
  columns:
    target_column: "QTY"
catalog:
  centers: ["VASAI"]
  items: []
"#;
        let config = from_yaml(yaml).unwrap();
        assert_eq!(config.server.api_bind, "127.0.0.1:9000");
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.data.history_path, PathBuf::from("fixtures/history.csv"));
        assert_eq!(config.data.columns.target_column, "QTY");
        assert_eq!(config.data.columns.date_column, "DATE");
        assert_eq!(config.catalog.centers, vec!["VASAI"]);
        assert!(config.catalog.items.is_empty());
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            from_yaml("server:\n  request_timeout_secs: 0\n"),
            Err(AppConfigError::Validation(_))
        ));
        assert!(matches!(
            from_yaml("forecast:\n  interval_width: 1.5\n"),
            Err(AppConfigError::Validation(_))
        ));
        assert!(matches!(
            from_yaml("models:\n  lightgbm:\n    half_life_days: -3\n"),
            Err(AppConfigError::Validation(_))
        ));
    }

    #[test]
    fn defaults_round_trip_through_yaml() {
        let yaml = serde_yaml::to_string(&AppConfig::default()).unwrap();
        let config = from_yaml(&yaml).unwrap();
        assert_eq!(config.server.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.analysis.unit, "kg");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("does/not/exist.yaml"))).is_err());
    }
}
