//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - HTML page and JSON handlers
//! - Middleware (CORS)
//! - Custom extractors
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::{api_doc, ApiDoc};
pub use routes::create_router;
pub use state::{template_environment, AppState};
