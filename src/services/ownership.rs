use chrono::NaiveDate;
use sqlx::{FromRow, PgConnection};
use tracing::debug;

use super::error::ServiceError;

/// The parts of a trip that sub-resource operations need after the owner check
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct OwnedTrip {
    pub trip_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl OwnedTrip {
    /// Whether `day` falls inside the trip, both ends inclusive
    pub fn spans(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

/// Load a trip only if `user_id` owns it, holding a share lock until the
/// surrounding transaction ends.
///
/// The lock keeps the trip from being deleted or re-dated between this check
/// and the caller's write. A trip that exists but belongs to someone else is
/// reported exactly like a missing one.
pub async fn lock_owned_trip(
    conn: &mut PgConnection,
    trip_id: i64,
    user_id: &str,
) -> Result<OwnedTrip, ServiceError> {
    let trip = sqlx::query_as::<_, OwnedTrip>(
        "SELECT trip_id, start_date, end_date
         FROM trips
         WHERE trip_id = $1 AND user_id = $2
         FOR SHARE",
    )
    .bind(trip_id)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await?;

    trip.ok_or_else(|| {
        debug!(trip_id, user_id, "Trip not found for caller");
        ServiceError::not_found("Trip not found")
    })
}
