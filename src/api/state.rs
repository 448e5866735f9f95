//! Application state - Dependency injection container.
//!
//! Holds the loaded settings, the template environment and the outbound
//! services every handler needs.

use std::path::Path;
use std::sync::Arc;

use minijinja::Environment;

use crate::config::{keys, ConfigError, Settings};
use crate::errors::AppResult;
use crate::jobs::{Mailer, SmtpMailer};
use crate::services::{AssetManager, AssetService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Immutable settings loaded at startup
    pub settings: Arc<Settings>,
    /// HTML templates
    pub templates: Arc<Environment<'static>>,
    /// Stock image lookup
    pub assets: Arc<dyn AssetService>,
    /// Contact notification transport
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Build state with the production services for `settings`.
    pub fn from_settings(settings: Settings) -> AppResult<Self> {
        let templates = template_environment(&settings.paths.templates_dir)?;
        let assets = AssetManager::from_settings(&settings.assets)?;
        let mailer = SmtpMailer::from_settings(&settings.smtp)?;

        if !mailer.is_configured() {
            tracing::warn!("SMTP credentials not configured, contact submissions will only be logged");
        }
        tracing::debug!(cache_dir = %assets.cache_dir().display(), "Asset manager ready");

        Ok(Self::new(
            Arc::new(settings),
            Arc::new(templates),
            Arc::new(assets),
            Arc::new(mailer),
        ))
    }

    /// Create state with manually injected services.
    pub fn new(
        settings: Arc<Settings>,
        templates: Arc<Environment<'static>>,
        assets: Arc<dyn AssetService>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            settings,
            templates,
            assets,
            mailer,
        }
    }
}

/// Template environment loading files from `dir` on first use.
pub fn template_environment(dir: &Path) -> AppResult<Environment<'static>> {
    if !dir.is_dir() {
        return Err(ConfigError::invalid(
            keys::TEMPLATES_DIR,
            dir.display().to_string(),
            "directory does not exist",
        )
        .into());
    }

    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader(dir));
    Ok(env)
}
