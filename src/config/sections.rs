//! Configuration sections, grouped by concern.

use std::fmt;
use std::path::PathBuf;

use jsonwebtoken::Algorithm;

use super::constants::CORS_WILDCARD;
use super::error::REDACTED;

fn redact<T>(value: &Option<T>) -> &'static str {
    if value.is_some() {
        REDACTED
    } else {
        "None"
    }
}

/// Application metadata.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Normalised: leading slash, no trailing slash, never the root
    pub api_prefix: String,
    pub debug: bool,
    /// Normalised origins in the order given; `*` allows every origin
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_wildcard_cors(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == CORS_WILDCARD)
    }
}

/// JWT signing settings.
#[derive(Clone)]
pub struct SecurityConfig {
    secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
    /// Set when DEBUG mode substituted the development secret
    pub using_dev_secret: bool,
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("secret_key", &REDACTED)
            .field("algorithm", &self.algorithm)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("using_dev_secret", &self.using_dev_secret)
            .finish()
    }
}

impl SecurityConfig {
    pub fn new(
        secret_key: String,
        algorithm: Algorithm,
        access_token_expire_minutes: i64,
        using_dev_secret: bool,
    ) -> Self {
        Self {
            secret_key,
            algorithm,
            access_token_expire_minutes,
            using_dev_secret,
        }
    }

    /// Get secret bytes for token signing/verification.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    pub fn access_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.access_token_expire_minutes)
    }
}

/// Optional database connection.
#[derive(Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &redact(&self.url))
            .finish()
    }
}

/// Filesystem locations served or read by the site.
#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
}

/// Public contact details shown on every page.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Outbound mail relay for contact form notifications.
#[derive(Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    password: Option<String>,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}

impl SmtpConfig {
    pub fn new(server: String, port: u16, username: Option<String>, password: Option<String>) -> Self {
        Self {
            server,
            port,
            username,
            password,
        }
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Mail is only sent when both credentials are present.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

/// Stock image lookup settings.
#[derive(Clone)]
pub struct AssetsConfig {
    unsplash_access_key: Option<String>,
    pub cache_dir: PathBuf,
    /// When off, images resolve to local placeholders without network calls.
    pub remote_lookups: bool,
}

impl fmt::Debug for AssetsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetsConfig")
            .field("unsplash_access_key", &redact(&self.unsplash_access_key))
            .field("cache_dir", &self.cache_dir)
            .field("remote_lookups", &self.remote_lookups)
            .finish()
    }
}

impl AssetsConfig {
    pub fn new(unsplash_access_key: Option<String>, cache_dir: PathBuf, remote_lookups: bool) -> Self {
        Self {
            unsplash_access_key,
            cache_dir,
            remote_lookups,
        }
    }

    pub fn unsplash_access_key(&self) -> Option<&str> {
        self.unsplash_access_key.as_deref()
    }
}
