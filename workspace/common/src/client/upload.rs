use serde::{Deserialize, Serialize};
use std::fmt;

use crate::UploadFailure;

/// Number of raw lines read for the preview (header + data rows).
pub const PREVIEW_LINES: usize = 6;

const CSV_CONTENT_TYPES: &[&str] = &["text/csv", "application/csv", "text/x-csv"];

/// Reason an upload is refused before it is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    MissingFile,
    NotCsv { file_name: String },
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadRejection::MissingFile => f.write_str("Please select a CSV file to upload"),
            UploadRejection::NotCsv { file_name } => {
                write!(f, "'{}' is not a CSV file. Please upload a .csv file", file_name)
            }
        }
    }
}

impl std::error::Error for UploadRejection {}

/// Accepts a file when either its extension or its content type says CSV.
///
/// Used by the dashboard before any request is made and by the server
/// on the multipart field.
pub fn validate_csv_file(
    file_name: &str,
    content_type: Option<&str>,
) -> Result<(), UploadRejection> {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return Err(UploadRejection::MissingFile);
    }

    let has_csv_extension = file_name.to_ascii_lowercase().ends_with(".csv");
    let has_csv_type = content_type
        .map(|ct| {
            let essence = ct.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
            CSV_CONTENT_TYPES.contains(&essence.as_str())
        })
        .unwrap_or(false);

    if has_csv_extension || has_csv_type {
        Ok(())
    } else {
        tracing::debug!(file_name, ?content_type, "rejecting non-CSV upload");
        Err(UploadRejection::NotCsv {
            file_name: file_name.to_string(),
        })
    }
}

/// Header plus the first data rows of a file, split naively on commas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvPreview {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvPreview {
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.rows.is_empty()
    }
}

/// Builds the visual preview of an upload.
///
/// No quoting or escaping is understood: a quoted field holding a comma
/// shows up as two cells. The preview never influences what is uploaded.
pub fn preview_csv(text: &str) -> CsvPreview {
    let mut lines = text.lines().take(PREVIEW_LINES).map(split_line);

    let header = match lines.next() {
        Some(header) => header,
        None => return CsvPreview::default(),
    };

    CsvPreview {
        header,
        rows: lines.collect(),
    }
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

/// Body of an upload response: either the payload or an `error` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UploadOutcome<T> {
    Failed(UploadFailure),
    Done(T),
}

impl<T> UploadOutcome<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            UploadOutcome::Done(value) => Ok(value),
            UploadOutcome::Failed(failure) => Err(failure.error),
        }
    }
}
