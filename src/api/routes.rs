//! Application route configuration.

use axum::Router;
use tower_http::compression::predicate::{NotForContentType, Predicate, SizeAbove};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{asset_routes, contact_api_routes, health_routes, page_routes};
use super::middleware::cors_layer;
use super::openapi::api_doc;
use super::AppState;
use crate::config::GZIP_MIN_SIZE_BYTES;
use crate::errors::AppError;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let settings = state.settings.clone();

    let api = Router::new()
        .merge(health_routes())
        .merge(contact_api_routes());

    let compression = CompressionLayer::new()
        .compress_when(SizeAbove::new(GZIP_MIN_SIZE_BYTES).and(NotForContentType::IMAGES));

    Router::new()
        // HTML pages and the contact form
        .merge(page_routes())
        // Health check at the root for load balancers
        .merge(health_routes())
        // Generated placeholder images
        .merge(asset_routes())
        // JSON API
        .nest(&settings.server.api_prefix, api)
        // OpenAPI Swagger UI documentation, kept off the public paths
        .merge(SwaggerUi::new("/admin/docs").url("/admin/openapi.json", api_doc(&settings)))
        .nest_service("/static", ServeDir::new(&settings.paths.static_dir))
        .fallback(not_found)
        // Global middleware
        .layer(compression)
        .layer(cors_layer(&settings.server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
