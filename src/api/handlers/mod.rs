//! HTTP request handlers.

pub mod asset_handler;
pub mod contact_handler;
pub mod health_handler;
pub mod page_handler;

pub use asset_handler::asset_routes;
pub use contact_handler::contact_api_routes;
pub use health_handler::health_routes;
pub use page_handler::page_routes;
