//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `config check|show` - Validate or print the configuration
//! - `token` - Issue an access token

pub mod args;

pub use args::{Cli, Commands};
