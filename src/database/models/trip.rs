use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub trip_id: i64,
    pub user_id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A trip with its read-time aggregates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub trip: Trip,
    /// Sum of all expense amounts, 0 when there are none
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    pub itinerary_count: i64,
}
