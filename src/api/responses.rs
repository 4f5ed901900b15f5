// api/responses.rs - success bodies returned by the trip routes

use serde::{Deserialize, Serialize};

use crate::database::models::{CategoryTotal, Expense, ItineraryItem, TripSummary};

#[derive(Debug, Serialize, Deserialize)]
pub struct TripListResponse {
    pub trips: Vec<TripSummary>,
}

/// Single trip, with a message on create and update
#[derive(Debug, Serialize, Deserialize)]
pub struct TripResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub trip: T,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryListResponse {
    pub items: Vec<ItineraryItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub message: String,
    pub item: ItineraryItem,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
    pub category_totals: Vec<CategoryTotal>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub message: String,
    pub expense: Expense,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
