use common::{CentersResponse, ItemsResponse};
use crate::api_client;

pub async fn get_centers() -> Result<CentersResponse, String> {
    log::trace!("Fetching distribution centers");
    api_client::get("/centers").await
}

/// Items sold at `center`, or every known item when no center is given.
pub async fn get_items(center: Option<&str>) -> Result<ItemsResponse, String> {
    let endpoint = match center {
        Some(center) => format!("/items?center={}", api_client::encode(center)),
        None => "/items".to_string(),
    };
    log::trace!("Fetching items for center: {:?}", center);
    api_client::get(&endpoint).await
}
