use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;

pub fn handle(user_id: String, email: Option<String>, output_format: OutputFormat) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    if config.security.jwt_secret.is_empty() {
        anyhow::bail!("JWT_SECRET is not set");
    }

    let claims = Claims::new(user_id, email, config.security.jwt_expiry_hours);
    let token = generate_jwt(&claims, &config.security.jwt_secret)?;

    match output_format {
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
        OutputFormat::Json => output_success(
            &output_format,
            "Token issued",
            Some(json!({
                "token": token,
                "user_id": claims.user_id,
                "expires_at": claims.exp,
            })),
        ),
    }
}
