use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};

use crate::api::requests::{ExpenseRequest, UserQuery};
use crate::api::responses::{ExpenseListResponse, ExpenseResponse, MessageResponse};
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::{ExpenseService, ServiceError};

use super::utils::resolve_user_id;

/// GET /trips/:tripId/expenses - newest first, plus per-category totals
pub async fn list(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<ExpenseListResponse> {
    let Path(trip_id) = path?;
    let Query(query) = query?;
    let user_id = resolve_user_id(query.user_id, auth.as_deref())?;

    let ledger = ExpenseService::new(state.pool()).list(trip_id, &user_id).await?;
    Ok(ApiResponse::success(ExpenseListResponse {
        expenses: ledger.expenses,
        category_totals: ledger.category_totals,
    }))
}

/// POST /trips/:tripId/expenses
pub async fn add(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    body: Result<Json<ExpenseRequest>, JsonRejection>,
) -> ApiResult<ExpenseResponse> {
    let Path(trip_id) = path?;
    let Json(mut body) = body?;
    let user_id = resolve_user_id(body.user_id.take(), auth.as_deref())?;
    let expense = body.validate().map_err(ServiceError::Validation)?;

    let expense = ExpenseService::new(state.pool()).add(trip_id, &user_id, expense).await?;
    Ok(ApiResponse::created(ExpenseResponse {
        message: "Expense added successfully".to_string(),
        expense,
    }))
}

/// DELETE /trips/:tripId/expenses/:expenseId
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    auth: Option<Extension<AuthUser>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> ApiResult<MessageResponse> {
    let Path((trip_id, expense_id)) = path?;
    let Query(query) = query?;
    let user_id = resolve_user_id(query.user_id, auth.as_deref())?;

    ExpenseService::new(state.pool()).delete(trip_id, expense_id, &user_id).await?;
    Ok(ApiResponse::success(MessageResponse::new("Expense deleted successfully")))
}
