use axum::{
    extract::{Query, State},
    response::Json,
};
use common::{CentersResponse, ItemsResponse};
use tracing::{debug, instrument};

use crate::schemas::{AppState, ItemsQuery};

/// List distribution centers
#[utoipa::path(
    get,
    path = "/centers",
    tag = "catalog",
    responses(
        (status = 200, description = "Centers sorted ascending", body = CentersResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_centers(State(state): State<AppState>) -> Json<CentersResponse> {
    let centers = state.engine.centers();
    debug!("Listing {} centers", centers.len());
    Json(CentersResponse::new(centers))
}

/// List items, optionally only those seen at one center
#[utoipa::path(
    get,
    path = "/items",
    tag = "catalog",
    params(ItemsQuery),
    responses(
        (status = 200, description = "Items sorted ascending", body = ItemsResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_items(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> Json<ItemsResponse> {
    let items = state.engine.items(query.center.as_deref());
    debug!("Listing {} items", items.len());
    Json(ItemsResponse::new(items))
}
