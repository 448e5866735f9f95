//! Token command - Issues an access token from the configured secret.

use crate::cli::args::TokenArgs;
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::services::TokenService;

/// Execute the token command
pub async fn execute(args: TokenArgs, settings: Settings) -> AppResult<()> {
    if settings.security.using_dev_secret {
        tracing::warn!("Signing with the development secret; do not use this token in production");
    }

    let token = TokenService::from_settings(&settings.security).issue(&args.subject)?;
    let json = serde_json::to_string_pretty(&token)
        .map_err(|e| AppError::internal(format!("Failed to encode token: {}", e)))?;

    println!("{}", json);
    Ok(())
}
