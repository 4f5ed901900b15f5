use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{delete, get, put},
    Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::handlers::{protected::trips, public};
use crate::middleware::jwt_auth_middleware;

/// Shared request state: the pool and the configuration it was built from
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseManager,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DatabaseManager, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn pool(&self) -> PgPool {
        self.db.pool().clone()
    }
}

/// Build the full router for `state`
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Trips, optionally behind bearer auth
        .merge(trip_routes(&state))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }

    router.with_state(state)
}

fn trip_routes(state: &AppState) -> Router<AppState> {
    let routes = Router::new()
        .route("/trips", get(trips::trip_list).post(trips::trip_create))
        .route(
            "/trips/:trip_id",
            get(trips::trip_get).put(trips::trip_update).delete(trips::trip_delete),
        )
        .route(
            "/trips/:trip_id/itinerary",
            get(trips::itinerary_list).post(trips::itinerary_add),
        )
        .route(
            "/trips/:trip_id/itinerary/:item_id",
            put(trips::itinerary_update).delete(trips::itinerary_delete),
        )
        .route(
            "/trips/:trip_id/expenses",
            get(trips::expense_list).post(trips::expense_add),
        )
        .route("/trips/:trip_id/expenses/:expense_id", delete(trips::expense_delete));

    if state.config.security.require_auth {
        routes.route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware))
    } else {
        routes
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(allowed))
}
