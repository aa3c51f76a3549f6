use axum::{http::StatusCode, response::Json};
use common::ErrorResponse;
use compute::error::ComputeError;
use tracing::{error, warn};

/// Rejection returned by handlers: a status plus a JSON error body.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(code, message)))
}

/// Maps engine errors onto HTTP statuses.
///
/// Lookup failures are 404, bad parameters 400, everything else is a
/// server-side failure.
pub fn compute_error(err: ComputeError) -> ApiError {
    let status = match &err {
        ComputeError::UnknownCenter(_) | ComputeError::UnknownItem(_) => StatusCode::NOT_FOUND,
        ComputeError::InvalidHorizon(_) | ComputeError::UnsupportedModel(_) => {
            StatusCode::BAD_REQUEST
        }
        ComputeError::MissingColumn(_) | ComputeError::EmptyDataset => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ComputeError::DataFrame(_) | ComputeError::Series(_) | ComputeError::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }
    api_error(status, err.code(), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_are_not_found() {
        let (status, Json(body)) = compute_error(ComputeError::UnknownCenter("NOWHERE".into()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, "UNKNOWN_CENTER");
        assert!(!body.success);
        assert!(body.error.contains("NOWHERE"));
    }

    #[test]
    fn bad_parameters_are_bad_requests() {
        let (status, _) = compute_error(ComputeError::InvalidHorizon("0".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
