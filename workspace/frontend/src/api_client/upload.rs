use common::{AnalysisSummary, DatasetOverview};
use web_sys::{File, FormData};
use crate::api_client;

fn file_form(file: &File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|_| "Failed to prepare upload".to_string())?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| "Failed to attach file to upload".to_string())?;
    Ok(form)
}

/// Uploads a history CSV and returns the monthly demand summary.
pub async fn upload_forecast(file: &File, forecast_months: u32) -> Result<AnalysisSummary, String> {
    log::debug!(
        "Uploading {} ({} bytes) for a {}-month forecast",
        file.name(),
        file.size(),
        forecast_months
    );
    let form = file_form(file)?;
    form.append_with_str("forecast_months", &forecast_months.to_string())
        .map_err(|_| "Failed to attach forecast horizon".to_string())?;
    api_client::post_form("/upload-forecast", form).await
}

/// Uploads a CSV for the structural overview only.
pub async fn analyze_data(file: &File) -> Result<DatasetOverview, String> {
    log::debug!("Uploading {} for dataset overview", file.name());
    let form = file_form(file)?;
    api_client::post_form("/analyze-data", form).await
}
