pub mod catalog;
pub mod forecast;
pub mod upload;

use common::client::UploadOutcome;
use common::ErrorResponse;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use web_sys::FormData;

use crate::settings;

/// Message shown when the API cannot be reached at all.
pub const TRANSPORT_ERROR: &str =
    "Could not reach the forecasting service. Please check that the API is running.";

fn api_base() -> String {
    settings::get_settings().api_base_url()
}

/// Percent-encodes a query value; center and item names contain spaces.
pub fn encode(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

/// Turns a non-OK response into the server's `error` text, verbatim when present.
async fn error_from_response(method: &str, endpoint: &str, response: Response) -> String {
    log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
    match response.json::<ErrorResponse>().await {
        Ok(err) => {
            log::error!("{} {} - API error [{}]: {}", method, endpoint, err.code, err.error);
            err.error
        }
        Err(_) => {
            let error_msg = format!("HTTP error: {}", response.status());
            log::error!("{} {} - {}", method, endpoint, error_msg);
            error_msg
        }
    }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("GET {} - Request failed: {}", endpoint, e);
        TRANSPORT_ERROR.to_string()
    })?;

    if !response.ok() {
        return Err(error_from_response("GET", endpoint, response).await);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", endpoint, error_msg);
        error_msg
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// Multipart POST handler for the upload endpoints.
///
/// These endpoints answer 200 with an `error` field when the analysis
/// fails, so the body is decoded as an [`UploadOutcome`].
pub async fn post_form<T>(endpoint: &str, form: FormData) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = format!("{}{}", api_base(), endpoint);
    log::debug!("POST (multipart) request to: {}", url);

    let request = Request::post(&url).body(form).map_err(|e| {
        let error_msg = format!("Failed to build request: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    let response = request.send().await.map_err(|e| {
        log::error!("POST {} - Request failed: {}", endpoint, e);
        TRANSPORT_ERROR.to_string()
    })?;

    if !response.ok() {
        return Err(error_from_response("POST", endpoint, response).await);
    }

    log::trace!("POST {} - Response received, parsing JSON", endpoint);
    let outcome: UploadOutcome<T> = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        error_msg
    })?;

    match outcome.into_result() {
        Ok(data) => {
            log::info!("POST {} - Success", endpoint);
            Ok(data)
        }
        Err(error) => {
            log::warn!("POST {} - Analysis failed: {}", endpoint, error);
            Err(error)
        }
    }
}
