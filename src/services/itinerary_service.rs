use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use tracing::info;

use crate::database::models::ItineraryItem;
use super::error::ServiceError;
use super::ownership::{lock_owned_trip, OwnedTrip};

#[derive(Debug, Clone, PartialEq)]
pub struct NewItineraryItem {
    pub day_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub place_name: String,
    pub place_id: Option<String>,
    pub place_address: Option<String>,
    pub place_photo: Option<String>,
    pub place_rating: Option<f64>,
    pub notes: Option<String>,
    pub order_index: i32,
}

/// Fields replaced by an itinerary update; everything else is left as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryItemChanges {
    pub day_date: NaiveDate,
    pub place_name: String,
    pub notes: Option<String>,
    pub order_index: i32,
}

/// Day-scheduled activities within a trip.
///
/// Each operation runs in one transaction that first takes the owner guard on
/// the parent trip.
pub struct ItineraryService {
    pool: PgPool,
}

impl ItineraryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Items ordered by day, then by their manual position within the day
    pub async fn list(&self, trip_id: i64, user_id: &str) -> Result<Vec<ItineraryItem>, ServiceError> {
        let mut tx = self.pool.begin().await?;
        lock_owned_trip(&mut tx, trip_id, user_id).await?;

        let items = sqlx::query_as::<_, ItineraryItem>(
            "SELECT * FROM itinerary_items
             WHERE trip_id = $1
             ORDER BY day_date ASC, order_index ASC, item_id ASC",
        )
        .bind(trip_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(items)
    }

    pub async fn add(&self, trip_id: i64, user_id: &str, item: NewItineraryItem) -> Result<ItineraryItem, ServiceError> {
        let mut tx = self.pool.begin().await?;
        let trip = lock_owned_trip(&mut tx, trip_id, user_id).await?;
        ensure_within_trip(&trip, item.day_date)?;

        let created = sqlx::query_as::<_, ItineraryItem>(
            "INSERT INTO itinerary_items
                (trip_id, day_date, start_time, place_name, place_id, place_address, place_photo, place_rating, notes, order_index)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING *",
        )
        .bind(trip_id)
        .bind(item.day_date)
        .bind(item.start_time)
        .bind(&item.place_name)
        .bind(&item.place_id)
        .bind(&item.place_address)
        .bind(&item.place_photo)
        .bind(item.place_rating)
        .bind(&item.notes)
        .bind(item.order_index)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(trip_id, item_id = created.item_id, day = %created.day_date, "Itinerary item added");
        Ok(created)
    }

    pub async fn update(
        &self,
        trip_id: i64,
        item_id: i64,
        user_id: &str,
        changes: ItineraryItemChanges,
    ) -> Result<ItineraryItem, ServiceError> {
        let mut tx = self.pool.begin().await?;
        let trip = lock_owned_trip(&mut tx, trip_id, user_id).await?;
        ensure_within_trip(&trip, changes.day_date)?;

        let updated = sqlx::query_as::<_, ItineraryItem>(
            "UPDATE itinerary_items
             SET day_date = $1, place_name = $2, notes = $3, order_index = $4
             WHERE item_id = $5 AND trip_id = $6
             RETURNING *",
        )
        .bind(changes.day_date)
        .bind(&changes.place_name)
        .bind(&changes.notes)
        .bind(changes.order_index)
        .bind(item_id)
        .bind(trip_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ServiceError::not_found("Itinerary item not found"))?;

        tx.commit().await?;
        info!(trip_id, item_id, "Itinerary item updated");
        Ok(updated)
    }

    pub async fn delete(&self, trip_id: i64, item_id: i64, user_id: &str) -> Result<(), ServiceError> {
        let mut tx = self.pool.begin().await?;
        lock_owned_trip(&mut tx, trip_id, user_id).await?;

        let result = sqlx::query("DELETE FROM itinerary_items WHERE item_id = $1 AND trip_id = $2")
            .bind(item_id)
            .bind(trip_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::not_found("Itinerary item not found"));
        }

        tx.commit().await?;
        info!(trip_id, item_id, "Itinerary item deleted");
        Ok(())
    }
}

fn ensure_within_trip(trip: &OwnedTrip, day: NaiveDate) -> Result<(), ServiceError> {
    if trip.spans(day) {
        return Ok(());
    }
    Err(ServiceError::invalid(
        "dayDate",
        format!("dayDate must fall between {} and {}", trip.start_date, trip.end_date),
    ))
}
