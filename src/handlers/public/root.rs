use axum::response::Json;
use serde_json::{json, Value};

/// GET / - service descriptor
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Trip Planner API",
        "version": version,
        "description": "Trips, itineraries and expenses for travel planning",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "trips": "/trips[/:tripId] (userId or bearer token)",
            "itinerary": "/trips/:tripId/itinerary[/:itemId] (userId or bearer token)",
            "expenses": "/trips/:tripId/expenses[/:expenseId] (userId or bearer token)",
        }
    }))
}
