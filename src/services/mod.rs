//! Application services layer - Token signing and image asset lookup.
//!
//! Services depend on configuration sections only, and the asset service is
//! exposed as a trait so handlers can be tested without network access.

pub mod asset_service;
mod token_service;

pub use asset_service::{
    parse_placeholder_size, placeholder_svg, placeholder_url, AssetManager, AssetService,
    PLACEHOLDER_TEXT,
};
pub use token_service::{AccessToken, Claims, TokenService};
