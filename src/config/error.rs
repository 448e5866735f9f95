//! Configuration loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Placeholder shown instead of a secret value in error messages.
pub(crate) const REDACTED: &str = "[REDACTED]";

/// Reasons the configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("env file {0} does not exist")]
    MissingEnvFile(PathBuf),

    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("SECRET_KEY must be at least {min} characters long (got {actual})")]
    SecretTooShort { min: usize, actual: usize },
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::Invalid {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Same as [`ConfigError::invalid`] but never echoes the value.
    pub(crate) fn invalid_secret(key: &'static str, reason: impl Into<String>) -> Self {
        Self::invalid(key, REDACTED, reason)
    }

    /// Name of the offending key, when the error concerns a single key.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::Missing(key) | ConfigError::Invalid { key, .. } => Some(key),
            ConfigError::SecretTooShort { .. } => Some("SECRET_KEY"),
            ConfigError::EnvFile { .. } | ConfigError::MissingEnvFile(_) => None,
        }
    }
}
