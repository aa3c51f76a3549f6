#[cfg(test)]
pub mod test_utils {
    use crate::router::{RouterLimits, create_router};
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use compute::analysis::UploadAnalyzer;
    use compute::dataset::HistoryDataset;
    use compute::forecast::ForecastEngine;
    use compute::settings::{DatasetColumns, EngineSettings};
    use std::sync::Once;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    static TRACING: Once = Once::new();

    /// Fixed "today" of every test app: forecasts start on 2025-03-11.
    pub fn test_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    /// Four weeks of history for two centers.
    pub const HISTORY_CSV: &str = "DATE,CENTER NAME,ITEM,PAY WEIGHT\n\
        2025-02-10,VASAI,MUNDI,120\n\
        2025-02-11,VASAI,MUNDI,80\n\
        2025-02-17,VASAI,MUNDI,130\n\
        2025-02-18,VASAI,MUNDI,90\n\
        2025-02-24,VASAI,MUNDI,110\n\
        2025-02-25,VASAI,BOMBIL,40\n\
        2025-03-03,VASAI,BOMBIL,45\n\
        2025-03-04,UTTAN,CHILAPI,300\n\
        2025-03-05,UTTAN,CHILAPI,280\n\
        2025-03-06,UTTAN,MUNDI,60\n";

    /// Create AppState for testing from the in-memory history fixture
    pub fn setup_test_app_state(settings: &EngineSettings) -> AppState {
        let columns = DatasetColumns::default();
        let dataset = HistoryDataset::from_csv_bytes(HISTORY_CSV.as_bytes().to_vec(), &columns)
            .expect("Failed to parse history fixture");
        let engine = ForecastEngine::new(dataset, settings, Some(test_today()));
        AppState::new(engine, UploadAnalyzer::default())
    }

    /// AppState without history, serving the fallback catalog
    pub fn setup_fallback_app_state() -> AppState {
        let engine = ForecastEngine::new(
            HistoryDataset::empty(),
            &EngineSettings::default(),
            Some(test_today()),
        );
        AppState::new(engine, UploadAnalyzer::default())
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// Installed once as the global subscriber so it outlives every test
    /// app. The log level is determined by the RUST_LOG environment
    /// variable, defaulting to WARN if not set.
    pub fn init_test_tracing() {
        TRACING.call_once(|| {
            // Another global subscriber may already be set by the harness
            let _ = tracing::subscriber::set_global_default(test_subscriber());
        });
    }

    fn test_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish()
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        setup_test_app_with(&EngineSettings::default())
    }

    /// Test app over the history fixture with custom engine settings
    pub fn setup_test_app_with(settings: &EngineSettings) -> Router {
        init_test_tracing();
        create_router(setup_test_app_state(settings), RouterLimits::default())
    }

    pub fn setup_fallback_app() -> Router {
        init_test_tracing();
        create_router(setup_fallback_app_state(), RouterLimits::default())
    }
}
