// Table DDL for trips, itinerary items and expenses.
use sqlx::PgPool;
use tracing::info;

use crate::database::manager::DatabaseError;

/// Arbitrary key for pg_advisory_xact_lock so concurrent starters don't race on CREATE TABLE
const SCHEMA_LOCK_KEY: i64 = 0x7472_6970_7300;

/// Users are owned by the auth service; this only guarantees the FK target exists.
const USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        user_id VARCHAR(36) PRIMARY KEY,
        email VARCHAR(255) NOT NULL,
        username VARCHAR(255) NOT NULL,
        password VARCHAR(255) NOT NULL
    )
"#;

const TRIPS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS trips (
        trip_id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        user_id VARCHAR(36) NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
        destination VARCHAR(255) NOT NULL,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        budget NUMERIC(10, 2) NOT NULL DEFAULT 0,
        description TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const ITINERARY_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS itinerary_items (
        item_id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        trip_id BIGINT NOT NULL REFERENCES trips(trip_id) ON DELETE CASCADE,
        day_date DATE NOT NULL,
        start_time TIME,
        place_name VARCHAR(255) NOT NULL,
        place_id VARCHAR(255),
        place_address TEXT,
        place_photo TEXT,
        place_rating DOUBLE PRECISION,
        notes TEXT,
        order_index INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const EXPENSES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses (
        expense_id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
        trip_id BIGINT NOT NULL REFERENCES trips(trip_id) ON DELETE CASCADE,
        category VARCHAR(50) NOT NULL,
        amount NUMERIC(10, 2) NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        expense_date DATE NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS trips_user_start_idx ON trips (user_id, start_date)",
    "CREATE INDEX IF NOT EXISTS itinerary_items_trip_order_idx ON itinerary_items (trip_id, day_date, order_index)",
    "CREATE INDEX IF NOT EXISTS expenses_trip_date_idx ON expenses (trip_id, expense_date)",
];

/// Create any missing tables and indexes. Safe to run on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    for (table, ddl) in [
        ("users", USERS_TABLE),
        ("trips", TRIPS_TABLE),
        ("itinerary_items", ITINERARY_ITEMS_TABLE),
        ("expenses", EXPENSES_TABLE),
    ] {
        sqlx::query(ddl)
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::MigrationError(format!("Failed to create table {}: {}", table, e)))?;
        info!("Schema checked: {}", table);
    }

    for ddl in INDEXES {
        sqlx::query(ddl)
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    }

    tx.commit().await?;
    Ok(())
}
