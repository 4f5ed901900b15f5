use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};

use crate::api::requests::{ItineraryItemRequest, ItineraryUpdateRequest, UserQuery};
use crate::api::responses::{ItemResponse, ItineraryListResponse, MessageResponse};
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{ItineraryService, ServiceError};

use super::utils::resolve_user_id;

/// GET /trips/:tripId/itinerary - ordered by day, then orderIndex
pub async fn list(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<ItineraryListResponse> {
    let Path(trip_id) = path?;
    let Query(query) = query?;
    let user_id = resolve_user_id(query.user_id, auth.as_deref())?;

    let items = ItineraryService::new(state.pool()).list(trip_id, &user_id).await?;
    Ok(ApiResponse::success(ItineraryListResponse { items }))
}

/// POST /trips/:tripId/itinerary
pub async fn add(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    body: Result<Json<ItineraryItemRequest>, JsonRejection>,
) -> ApiResult<ItemResponse> {
    let Path(trip_id) = path?;
    let Json(mut body) = body?;
    let user_id = resolve_user_id(body.user_id.take(), auth.as_deref())?;
    let item = body.validate().map_err(ServiceError::Validation)?;

    let item = ItineraryService::new(state.pool()).add(trip_id, &user_id, item).await?;
    Ok(ApiResponse::created(ItemResponse {
        message: "Itinerary item added successfully".to_string(),
        item,
    }))
}

/// PUT /trips/:tripId/itinerary/:itemId
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    body: Result<Json<ItineraryUpdateRequest>, JsonRejection>,
) -> ApiResult<ItemResponse> {
    let Path((trip_id, item_id)) = path?;
    let Json(mut body) = body?;
    let user_id = resolve_user_id(body.user_id.take(), auth.as_deref())?;
    let changes = body.validate().map_err(ServiceError::Validation)?;

    let item = ItineraryService::new(state.pool())
        .update(trip_id, item_id, &user_id, changes)
        .await?;
    Ok(ApiResponse::success(ItemResponse {
        message: "Itinerary item updated successfully".to_string(),
        item,
    }))
}

/// DELETE /trips/:tripId/itinerary/:itemId
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let Path((trip_id, item_id)) = path?;
    let Query(query) = query?;
    let user_id = resolve_user_id(query.user_id, auth.as_deref())?;

    ItineraryService::new(state.pool()).delete(trip_id, item_id, &user_id).await?;
    Ok(ApiResponse::success(MessageResponse::new("Itinerary item deleted successfully")))
}
