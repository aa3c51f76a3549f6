//! Thin helpers over polars for reading delimited text into plain vectors.

use polars::prelude::*;
use std::io::Cursor;
use tracing::{debug, instrument};

use crate::error::Result;

/// Reads CSV bytes with a header row into a DataFrame.
#[instrument(skip(bytes), fields(size = bytes.len()))]
pub fn read_csv_bytes(bytes: Vec<u8>) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;

    debug!("Read CSV with {} rows and {} columns", df.height(), df.width());
    Ok(df)
}

pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Values of a column as floats; cells that are not numeric become `None`.
pub fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

/// Values of a column rendered as strings.
pub fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    Ok(series
        .str()?
        .into_iter()
        .map(|value| value.map(|s| s.trim().to_string()))
        .collect())
}
