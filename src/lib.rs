//! HST Professional Services - Company website with typed configuration
//!
//! The site is configured entirely through `KEY="value"` environment
//! files overlaid by the process environment. Settings are validated once
//! at startup and shared read-only afterwards.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Env file loading, typed settings and constants
//! - **logging**: Tracing subscriber setup
//! - **domain**: Site content and the contact form
//! - **services**: Access tokens and stock image lookup
//! - **jobs**: Background email delivery
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Validate a deployment's env file
//! cargo run -- --env-file prod.env config check
//!
//! # Mint an access token
//! cargo run -- token ops@hst.ie
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod jobs;
pub mod logging;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Settings;
pub use domain::{ContactForm, ContactResponse};
pub use errors::{AppError, AppResult};
