use std::time::Duration;

use serde_json::Value;

use crate::cli::{
    utils::{output_error, output_success},
    OutputFormat,
};

pub async fn handle(base_url: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let url = url::Url::parse(base_url)?.join("health")?;
    let client = reqwest::Client::new();

    let response = client.get(url.clone()).timeout(Duration::from_secs(5)).send().await?;
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    if status.is_success() {
        output_success(&output_format, &format!("{} is healthy", url), Some(body))
    } else {
        output_error(
            &output_format,
            &format!("{} answered {}", url, status),
            body.get("status").and_then(Value::as_str),
        )?;
        anyhow::bail!("server is unhealthy")
    }
}
