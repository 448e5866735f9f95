//! Application configuration module
//!
//! Reads `KEY="value"` env files and the process environment into a typed,
//! validated [`Settings`] record. Settings are loaded once at startup and
//! never change afterwards.

mod constants;
mod env_file;
mod error;
mod logging;
mod sections;
mod settings;

pub use constants::*;
pub use env_file::EnvSource;
pub use error::ConfigError;
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use sections::{
    AppInfo, AssetsConfig, ContactConfig, DatabaseConfig, PathsConfig, SecurityConfig,
    ServerConfig, SmtpConfig,
};
pub use settings::{keys, Settings, DEFAULT_ENV_FILE};
