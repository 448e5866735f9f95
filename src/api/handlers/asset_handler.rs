//! Generated image placeholders.

use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::config::MAX_PLACEHOLDER_DIMENSION;
use crate::errors::{AppError, AppResult};
use crate::services::{parse_placeholder_size, placeholder_svg, PLACEHOLDER_TEXT};

pub fn asset_routes() -> Router<AppState> {
    Router::new().route("/placeholders/:size", get(placeholder))
}

/// `GET /placeholders/{w}x{h}.svg`
pub async fn placeholder(Path(size): Path<String>) -> AppResult<Response> {
    let (width, height) = parse_placeholder_size(&size).ok_or_else(|| {
        AppError::BadRequest(format!(
            "expected {{width}}x{{height}}.svg with each side between 1 and {}",
            MAX_PLACEHOLDER_DIMENSION
        ))
    })?;

    let headers = [
        (header::CONTENT_TYPE, "image/svg+xml"),
        (header::CACHE_CONTROL, "public, max-age=86400"),
    ];
    Ok((headers, placeholder_svg(width, height, PLACEHOLDER_TEXT)).into_response())
}
