use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub item_id: i64,
    pub trip_id: i64,
    pub day_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub place_name: String,
    pub place_id: Option<String>,
    pub place_address: Option<String>,
    pub place_photo: Option<String>,
    pub place_rating: Option<f64>,
    pub notes: Option<String>,
    /// Manual position within a day; ties on day_date sort by this
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}
