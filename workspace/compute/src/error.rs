use common::ModelKind;
use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),

    /// Error reading a history or upload file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Center not present in the catalog
    #[error("Unknown center '{0}'")]
    UnknownCenter(String),

    /// Item not present in the catalog
    #[error("Unknown item '{0}'")]
    UnknownItem(String),

    /// Forecast horizon outside the accepted range
    #[error("Invalid forecast horizon: {0}")]
    InvalidHorizon(String),

    /// No demand model registered for the requested kind
    #[error("No model registered for '{0}'")]
    UnsupportedModel(ModelKind),

    /// A required column could not be found
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// The data has a header but no rows
    #[error("The file contains no data rows")]
    EmptyDataset,
}

impl ComputeError {
    /// Stable machine readable code used in API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            ComputeError::DataFrame(_) | ComputeError::Series(_) => "INVALID_DATA",
            ComputeError::Io(_) => "IO_ERROR",
            ComputeError::UnknownCenter(_) => "UNKNOWN_CENTER",
            ComputeError::UnknownItem(_) => "UNKNOWN_ITEM",
            ComputeError::InvalidHorizon(_) => "INVALID_HORIZON",
            ComputeError::UnsupportedModel(_) => "UNSUPPORTED_MODEL",
            ComputeError::MissingColumn(_) => "MISSING_COLUMN",
            ComputeError::EmptyDataset => "EMPTY_DATASET",
        }
    }
}

impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        match error {
            polars::error::PolarsError::NoData(_) => {
                let err = ComputeError::DataFrame(format!("No data: {}", error));
                error!(?err, "DataFrame error: No data");
                err
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Shape mismatch: {}", error));
                error!(?err, "DataFrame error: Shape mismatch");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::ComputeError(_) => {
                let err = ComputeError::DataFrame(format!("Compute error: {}", error));
                error!(?err, "DataFrame error: Compute error");
                err
            }
            polars::error::PolarsError::ColumnNotFound(_) => {
                let err = ComputeError::MissingColumn(error.to_string());
                error!(?err, "DataFrame error: Column not found");
                err
            }
            _ => {
                let err = ComputeError::Series(format!("Series error: {}", error));
                error!(?err, "Series error");
                err
            }
        }
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
