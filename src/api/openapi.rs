//! OpenAPI documentation configuration.
//!
//! Covers the JSON endpoints only; paths are relative to `API_PREFIX`,
//! which is published as the server URL.

use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use crate::api::handlers::{contact_handler, health_handler};
use crate::config::Settings;
use crate::domain::{ContactForm, ContactResponse};

/// OpenAPI documentation for the site's JSON API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HST Professional Services",
        description = "Professional consulting and technology services website",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "HST Professional Services", email = "info@hst.ie")
    ),
    paths(health_handler::health, contact_handler::create_contact),
    components(schemas(ContactForm, ContactResponse, health_handler::HealthResponse)),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Contact", description = "Contact form submissions")
    )
)]
pub struct ApiDoc;

/// API document with title, version and server URL taken from `settings`.
pub fn api_doc(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = settings.app.name.clone();
    doc.info.description = Some(settings.app.description.clone());
    doc.info.version = settings.app.version.clone();
    doc.servers = Some(vec![Server::new(settings.server.api_prefix.clone())]);
    doc
}
