use anyhow::Context;

use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::{ensure_schema, DatabaseManager};

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    let db = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;
    let result = ensure_schema(db.pool()).await;
    db.close().await;
    result.context("failed to prepare the schema")?;

    output_success(&output_format, "Schema is up to date", None)
}
