use axum::extract::Multipart;
use axum::http::StatusCode;
use common::client::{UploadRejection, validate_csv_file};
use tracing::{debug, trace};

use super::errors::{ApiError, api_error};

pub const DEFAULT_FORECAST_MONTHS: u32 = 12;

/// A file field read from a multipart body.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Fields the upload endpoints understand. Anything else is ignored.
#[derive(Debug, Default)]
pub struct UploadFields {
    pub file: Option<UploadedFile>,
    pub forecast_months: Option<String>,
}

impl UploadFields {
    /// The uploaded file, provided it is present and looks like CSV.
    pub fn csv_file(self) -> Result<UploadedFile, ApiError> {
        let file = self
            .file
            .ok_or_else(|| rejection(UploadRejection::MissingFile))?;
        validate_csv_file(&file.file_name, file.content_type.as_deref()).map_err(rejection)?;
        Ok(file)
    }

    /// `forecast_months`, defaulting to 12 and limited to `1..=max`.
    pub fn forecast_months(&self, max: u32) -> Result<u32, ApiError> {
        let raw = self.forecast_months.as_deref().map(str::trim);
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return Ok(DEFAULT_FORECAST_MONTHS);
        };
        match raw.parse::<u32>() {
            Ok(months) if (1..=max).contains(&months) => Ok(months),
            _ => Err(api_error(
                StatusCode::BAD_REQUEST,
                "INVALID_FORECAST_MONTHS",
                format!("forecast_months must be an integer between 1 and {}, got '{}'", max, raw),
            )),
        }
    }
}

fn rejection(rejection: UploadRejection) -> ApiError {
    let code = match rejection {
        UploadRejection::MissingFile => "MISSING_FILE",
        UploadRejection::NotCsv { .. } => "INVALID_FILE_TYPE",
    };
    api_error(StatusCode::BAD_REQUEST, code, rejection.to_string())
}

/// Drains a multipart body into [`UploadFields`].
pub async fn read_upload_fields(mut multipart: Multipart) -> Result<UploadFields, ApiError> {
    let mut fields = UploadFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(e.status(), "INVALID_MULTIPART", e.body_text()))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| api_error(e.status(), "INVALID_MULTIPART", e.body_text()))?;
                debug!(file_name, ?content_type, size = bytes.len(), "Received upload");
                fields.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("forecast_months") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| api_error(e.status(), "INVALID_MULTIPART", e.body_text()))?;
                fields.forecast_months = Some(value);
            }
            other => trace!(field = ?other, "Ignoring multipart field"),
        }
    }

    Ok(fields)
}
