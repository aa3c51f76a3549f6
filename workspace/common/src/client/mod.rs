//! Browser-independent dashboard logic.
//!
//! The Yew components only wire these types to the DOM; everything that
//! decides *what* to show lives here so it can be tested natively.

pub mod loading;
pub mod metrics;
pub mod notifications;
pub mod upload;

pub use loading::LoadingTracker;
pub use metrics::{MetricEntry, MetricsPanel};
pub use notifications::{Notification, NotificationLevel, NotificationQueue};
pub use upload::{CsvPreview, UploadOutcome, UploadRejection, preview_csv, validate_csv_file};
