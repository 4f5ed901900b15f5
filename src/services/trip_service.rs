use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::{Trip, TripSummary};
use super::error::ServiceError;

/// Trip row plus its spend total and itinerary size, computed at read time
const SUMMARY_SELECT: &str = r#"
    SELECT t.*,
        COALESCE((SELECT SUM(e.amount) FROM expenses e WHERE e.trip_id = t.trip_id), 0) AS total_spent,
        (SELECT COUNT(*) FROM itinerary_items i WHERE i.trip_id = t.trip_id) AS itinerary_count
    FROM trips t
"#;

/// Editable trip fields. Create and update both take the full set.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetails {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Decimal,
    pub description: String,
}

/// Trips scoped to their owner. Every statement filters on both trip and user,
/// so a trip owned by someone else is indistinguishable from a missing one.
pub struct TripService {
    pool: PgPool,
}

impl TripService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All trips of `user_id`, earliest start first
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<TripSummary>, ServiceError> {
        let sql = format!("{SUMMARY_SELECT} WHERE t.user_id = $1 ORDER BY t.start_date ASC, t.trip_id ASC");

        let trips = sqlx::query_as::<_, TripSummary>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(trips)
    }

    pub async fn get(&self, trip_id: i64, user_id: &str) -> Result<TripSummary, ServiceError> {
        let sql = format!("{SUMMARY_SELECT} WHERE t.trip_id = $1 AND t.user_id = $2");

        sqlx::query_as::<_, TripSummary>(&sql)
            .bind(trip_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ServiceError::not_found("Trip not found"))
    }

    pub async fn create(&self, user_id: &str, details: TripDetails) -> Result<Trip, ServiceError> {
        let trip = sqlx::query_as::<_, Trip>(
            "INSERT INTO trips (user_id, destination, start_date, end_date, budget, description)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(user_id)
        .bind(&details.destination)
        .bind(details.start_date)
        .bind(details.end_date)
        .bind(details.budget)
        .bind(&details.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::ForeignKeyViolation(_) => ServiceError::not_found("User not found"),
            other => other.into(),
        })?;

        info!(trip_id = trip.trip_id, user_id, "Trip created");
        Ok(trip)
    }

    /// Replace every editable field of an owned trip
    pub async fn update(&self, trip_id: i64, user_id: &str, details: TripDetails) -> Result<Trip, ServiceError> {
        let trip = sqlx::query_as::<_, Trip>(
            "UPDATE trips
             SET destination = $1, start_date = $2, end_date = $3, budget = $4, description = $5
             WHERE trip_id = $6 AND user_id = $7
             RETURNING *",
        )
        .bind(&details.destination)
        .bind(details.start_date)
        .bind(details.end_date)
        .bind(details.budget)
        .bind(&details.description)
        .bind(trip_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ServiceError::not_found("Trip not found"))?;

        info!(trip_id, user_id, "Trip updated");
        Ok(trip)
    }

    /// Delete an owned trip; its itinerary items and expenses go with it.
    pub async fn delete(&self, trip_id: i64, user_id: &str) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM trips WHERE trip_id = $1 AND user_id = $2")
            .bind(trip_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::not_found("Trip not found"));
        }

        info!(trip_id, user_id, "Trip deleted");
        Ok(())
    }
}
