use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};

use crate::api::requests::{TripRequest, UserQuery};
use crate::api::responses::{MessageResponse, TripListResponse, TripResponse};
use crate::app::AppState;
use crate::database::models::{Trip, TripSummary};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{ServiceError, TripService};

use super::utils::resolve_user_id;

/// GET /trips - the caller's trips with spend totals and itinerary counts
pub async fn list(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<TripListResponse> {
    let Query(query) = query?;
    let user_id = resolve_user_id(query.user_id, auth.as_deref())?;

    let trips = TripService::new(state.pool()).list_for_user(&user_id).await?;
    Ok(ApiResponse::success(TripListResponse { trips }))
}

/// GET /trips/:tripId
pub async fn get(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<TripResponse<TripSummary>> {
    let Path(trip_id) = path?;
    let Query(query) = query?;
    let user_id = resolve_user_id(query.user_id, auth.as_deref())?;

    let trip = TripService::new(state.pool()).get(trip_id, &user_id).await?;
    Ok(ApiResponse::success(TripResponse { message: None, trip }))
}

/// POST /trips
pub async fn create(
    State(state): State<AppState>,
    auth: Option<Extension<AuthUser>>,
    body: Result<Json<TripRequest>, JsonRejection>,
) -> ApiResult<TripResponse<Trip>> {
    let Json(mut body) = body?;
    let user_id = resolve_user_id(body.user_id.take(), auth.as_deref())?;
    let details = body.validate().map_err(ServiceError::Validation)?;

    let trip = TripService::new(state.pool()).create(&user_id, details).await?;
    Ok(ApiResponse::created(TripResponse {
        message: Some("Trip created successfully".to_string()),
        trip,
    }))
}

/// PUT /trips/:tripId - full replacement of the editable fields
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    body: Result<Json<TripRequest>, JsonRejection>,
) -> ApiResult<TripResponse<Trip>> {
    let Path(trip_id) = path?;
    let Json(mut body) = body?;
    let user_id = resolve_user_id(body.user_id.take(), auth.as_deref())?;
    let details = body.validate().map_err(ServiceError::Validation)?;

    let trip = TripService::new(state.pool()).update(trip_id, &user_id, details).await?;
    Ok(ApiResponse::success(TripResponse {
        message: Some("Trip updated successfully".to_string()),
        trip,
    }))
}

/// DELETE /trips/:tripId - removes the trip with its itinerary and expenses
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let Path(trip_id) = path?;
    let Query(query) = query?;
    let user_id = resolve_user_id(query.user_id, auth.as_deref())?;

    TripService::new(state.pool()).delete(trip_id, &user_id).await?;
    Ok(ApiResponse::success(MessageResponse::new("Trip deleted successfully")))
}
