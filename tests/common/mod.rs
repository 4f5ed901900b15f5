#![allow(dead_code)]

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;
use sqlx::PgPool;

use trip_planner_api::{
    app,
    config::AppConfig,
    database::{ensure_schema, DatabaseManager},
    logging, AppState,
};

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub pool: PgPool,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Insert a fresh user row and return its id
    pub async fn seed_user(&self) -> Result<String> {
        let user_id = uuid::Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO users (user_id, email, username, password) VALUES ($1, $2, $3, $4)")
            .bind(&user_id)
            .bind(format!("{}@example.test", user_id))
            .bind(format!("traveler-{}", &user_id[..8]))
            .bind("not-a-real-hash")
            .execute(&self.pool)
            .await
            .context("failed to seed user")?;
        Ok(user_id)
    }

    /// POST a trip for `user_id` and return its id
    pub async fn create_trip(&self, user_id: &str, start: &str, end: &str) -> Result<i64> {
        let res = self
            .client
            .post(self.url("/trips"))
            .json(&serde_json::json!({
                "userId": user_id,
                "destination": "Lisbon",
                "startDate": start,
                "endDate": end,
            }))
            .send()
            .await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "trip create failed: {}", res.status());
        let body: Value = res.json().await?;
        body["trip"]["tripId"].as_i64().context("tripId missing")
    }
}

fn database_url() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Start the app on a free port against the test database.
///
/// Returns `None` (and prints a notice) when no database is configured so
/// database-backed tests can skip.
pub async fn spawn_server(require_auth: bool) -> Result<Option<TestServer>> {
    let Some(url) = database_url() else {
        eprintln!("skipping: set TEST_DATABASE_URL or DATABASE_URL to run database tests");
        return Ok(None);
    };

    logging::init_tracing("warn");

    let mut config = AppConfig::default();
    config.database.url = Some(url);
    config.database.max_connections = 5;
    config.api.enable_request_logging = false;
    config.security.require_auth = require_auth;
    config.security.jwt_secret = TEST_SECRET.to_string();

    let db = DatabaseManager::connect(&config.database).await?;
    ensure_schema(db.pool()).await?;
    let pool = db.pool().clone();

    // Pick an unused port for isolation
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;

    let router = app(AppState::new(db, config));
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("test server stopped: {}", e);
        }
    });

    let server = TestServer {
        port,
        base_url,
        pool,
        client: reqwest::Client::new(),
    };
    wait_ready(&server, Duration::from_secs(10)).await?;
    Ok(Some(server))
}

async fn wait_ready(server: &TestServer, timeout: Duration) -> Result<()> {
    let deadline = Instant::now() + timeout;
    loop {
        if Instant::now() > deadline {
            break;
        }
        if let Ok(resp) = server.client.get(server.url("/health")).send().await {
            if resp.status() == StatusCode::OK || resp.status() == StatusCode::SERVICE_UNAVAILABLE {
                return Ok(());
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("server did not become ready on {} within {:?}", server.base_url, timeout)
}
