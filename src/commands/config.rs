//! Config command - Validates or prints the loaded configuration.
//!
//! Loading already happened in `main`; reaching this command means the
//! configuration parsed and validated.

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::Settings;
use crate::errors::AppResult;

/// Execute the config command
pub async fn execute(args: ConfigArgs, settings: Settings) -> AppResult<()> {
    match args.action {
        ConfigAction::Check => {
            for warning in warnings(&settings) {
                tracing::warn!("{}", warning);
            }
            println!("configuration OK");
        }
        ConfigAction::Show => {
            print!("{}", render_summary(&settings));
        }
    }
    Ok(())
}

/// Non-fatal problems worth reporting before deployment.
fn warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();

    if settings.security.using_dev_secret {
        warnings.push("SECRET_KEY is not set; the development secret is in use".to_string());
    }
    if settings.server.debug {
        warnings.push("DEBUG is enabled".to_string());
    }
    if let Some(format) = &settings.logging.unrecognized_format {
        warnings.push(format!("LOG_FORMAT {:?} is not recognised; using full", format));
    }
    if !settings.smtp.has_credentials() {
        warnings.push("SMTP credentials not set; contact emails will only be logged".to_string());
    }
    if !settings.paths.templates_dir.is_dir() {
        warnings.push(format!(
            "TEMPLATES_DIR {} does not exist",
            settings.paths.templates_dir.display()
        ));
    }
    if !settings.paths.static_dir.is_dir() {
        warnings.push(format!(
            "STATIC_DIR {} does not exist",
            settings.paths.static_dir.display()
        ));
    }

    warnings
}

/// `KEY="value"` lines in env file syntax, secrets masked.
fn render_summary(settings: &Settings) -> String {
    settings
        .masked_summary()
        .into_iter()
        .map(|(key, value)| format!("{}={:?}\n", key, value))
        .collect()
}
