// api/requests.rs - lenient request bodies and their validation into typed commands
//
// Every field is optional at the serde level so a missing field surfaces as a
// per-field validation message rather than a JSON rejection.

use serde::Deserialize;
use serde_json::Value;

use crate::services::{ItineraryItemChanges, NewExpense, NewItineraryItem, TripDetails, ValidationFailure};

use super::validation::Validator;

const DESTINATION_MAX: usize = 255;
const PLACE_NAME_MAX: usize = 255;
const PLACE_FIELD_MAX: usize = 255;
const CATEGORY_MAX: usize = 50;

/// `?userId=` on reads and deletes
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub user_id: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub budget: Option<Value>,
    pub description: Option<String>,
}

impl TripRequest {
    pub fn validate(self) -> Result<TripDetails, ValidationFailure> {
        let mut v = Validator::default();
        let destination = v.required_text("destination", self.destination, DESTINATION_MAX);
        let start_date = v.required_date("startDate", self.start_date);
        let end_date = v.required_date("endDate", self.end_date);
        let budget = v.budget("budget", self.budget);
        let description = self.description.unwrap_or_default();

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                v.invalid("endDate", "endDate must be on or after startDate");
            }
        }

        match (destination, start_date, end_date, budget) {
            (Some(destination), Some(start_date), Some(end_date), Some(budget)) if v.is_clean() => Ok(TripDetails {
                destination,
                start_date,
                end_date,
                budget,
                description,
            }),
            _ => Err(v.into_error()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItemRequest {
    pub user_id: Option<String>,
    pub day_date: Option<String>,
    pub start_time: Option<String>,
    pub place_name: Option<String>,
    pub place_id: Option<String>,
    pub place_address: Option<String>,
    pub place_photo: Option<String>,
    pub place_rating: Option<Value>,
    pub notes: Option<String>,
    pub order_index: Option<Value>,
}

impl ItineraryItemRequest {
    pub fn validate(self) -> Result<NewItineraryItem, ValidationFailure> {
        let mut v = Validator::default();
        let day_date = v.required_date("dayDate", self.day_date);
        let place_name = v.required_text("placeName", self.place_name, PLACE_NAME_MAX);
        let start_time = v.optional_time("startTime", self.start_time);
        let place_id = v.optional_text("placeId", self.place_id, PLACE_FIELD_MAX);
        let place_address = v.optional_text("placeAddress", self.place_address, PLACE_FIELD_MAX);
        let place_photo = non_empty(self.place_photo);
        let place_rating = v.optional_float("placeRating", self.place_rating);
        let notes = non_empty(self.notes);
        let order_index = v.optional_int("orderIndex", self.order_index).unwrap_or(0);

        match (day_date, place_name) {
            (Some(day_date), Some(place_name)) if v.is_clean() => Ok(NewItineraryItem {
                day_date,
                start_time,
                place_name,
                place_id,
                place_address,
                place_photo,
                place_rating,
                notes,
                order_index,
            }),
            _ => Err(v.into_error()),
        }
    }
}

/// Full replacement of the editable item fields
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryUpdateRequest {
    pub user_id: Option<String>,
    pub day_date: Option<String>,
    pub place_name: Option<String>,
    pub notes: Option<String>,
    pub order_index: Option<Value>,
}

impl ItineraryUpdateRequest {
    pub fn validate(self) -> Result<ItineraryItemChanges, ValidationFailure> {
        let mut v = Validator::default();
        let day_date = v.required_date("dayDate", self.day_date);
        let place_name = v.required_text("placeName", self.place_name, PLACE_NAME_MAX);
        let notes = non_empty(self.notes);
        let order_index = v.optional_int("orderIndex", self.order_index).unwrap_or(0);

        match (day_date, place_name) {
            (Some(day_date), Some(place_name)) if v.is_clean() => Ok(ItineraryItemChanges {
                day_date,
                place_name,
                notes,
                order_index,
            }),
            _ => Err(v.into_error()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub user_id: Option<String>,
    pub category: Option<String>,
    pub amount: Option<Value>,
    pub description: Option<String>,
    pub expense_date: Option<String>,
}

impl ExpenseRequest {
    pub fn validate(self) -> Result<NewExpense, ValidationFailure> {
        let mut v = Validator::default();
        let category = v.required_text("category", self.category, CATEGORY_MAX);
        let amount = v.required_amount("amount", self.amount);
        let expense_date = v.required_date("expenseDate", self.expense_date);
        let description = self.description.unwrap_or_default();

        match (category, amount, expense_date) {
            (Some(category), Some(amount), Some(expense_date)) if v.is_clean() => Ok(NewExpense {
                category,
                amount,
                description,
                expense_date,
            }),
            _ => Err(v.into_error()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
