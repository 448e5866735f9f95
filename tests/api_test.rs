//! Integration tests for the HTTP application.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`. Image
//! lookups and email delivery are replaced with hand-written test doubles,
//! so no network access is needed.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tokio::sync::mpsc;
use tower::ServiceExt;

use hst_site::api::{create_router, template_environment, AppState};
use hst_site::config::{EnvSource, Settings};
use hst_site::errors::AppResult;
use hst_site::jobs::{EmailJob, Mailer};
use hst_site::services::AssetService;

// =============================================================================
// Test doubles
// =============================================================================

/// Asset service returning predictable URLs
struct StubAssets;

#[async_trait]
impl AssetService for StubAssets {
    async fn get_image(&self, category: &str, width: u32, height: u32) -> String {
        format!("https://img.test/{}/{}x{}", category, width, height)
    }
}

/// Mailer forwarding every job to a channel
struct ChannelMailer {
    sender: mpsc::UnboundedSender<EmailJob>,
}

#[async_trait]
impl Mailer for ChannelMailer {
    async fn send(&self, job: EmailJob) -> AppResult<()> {
        let _ = self.sender.send(job);
        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn project_dir(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(name)
        .display()
        .to_string()
}

fn test_settings(extra: &[(&str, &str)]) -> Settings {
    let mut pairs = vec![
        ("SECRET_KEY".to_string(), "integration-test-secret-key-32-chars!".to_string()),
        ("STATIC_DIR".to_string(), project_dir("static")),
        ("TEMPLATES_DIR".to_string(), project_dir("templates")),
        ("CONTACT_EMAIL".to_string(), "owner@hst.test".to_string()),
        ("APP_VERSION".to_string(), "9.9.9".to_string()),
    ];
    pairs.extend(extra.iter().map(|(k, v)| (k.to_string(), v.to_string())));

    Settings::from_source(&EnvSource::from_pairs(pairs)).unwrap()
}

fn test_app_with(extra: &[(&str, &str)]) -> (Router, mpsc::UnboundedReceiver<EmailJob>) {
    let settings = test_settings(extra);
    let templates = template_environment(&settings.paths.templates_dir).unwrap();
    let (sender, receiver) = mpsc::unbounded_channel();

    let state = AppState::new(
        Arc::new(settings),
        Arc::new(templates),
        Arc::new(StubAssets),
        Arc::new(ChannelMailer { sender }),
    );
    (create_router(state), receiver)
}

fn test_app() -> (Router, mpsc::UnboundedReceiver<EmailJob>) {
    test_app_with(&[])
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

fn form_request(body: &str) -> Request<Body> {
    Request::post("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

const VALID_FORM: &str = "name=Jane+Smith&email=jane%40example.com&company=&phone=\
    &service=Technology+Strategy&message=We+would+like+a+roadmap+review.";

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_version() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], "9.9.9");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_under_api_prefix() {
    let (app, _) = test_app();
    let (status, _) = get(app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_custom_api_prefix_moves_api() {
    let (app, _) = test_app_with(&[("API_PREFIX", "internal/api/")]);
    let (status, _) = get(app.clone(), "/internal/api/health").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_homepage_renders_with_base_context() {
    let (app, _) = test_app_with(&[("APP_NAME", "Test Consulting Ltd")]);
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Test Consulting Ltd"));
    assert!(body.contains("owner@hst.test"));
    // Template output escapes '/' in URLs, so match on the distinctive parts.
    assert!(body.contains("business-team"));
    assert!(body.contains("technology-consulting"));
    assert!(body.contains("1920x1080"));
}

#[tokio::test]
async fn test_every_page_renders() {
    for uri in ["/", "/about", "/services", "/contact", "/contact/success", "/blog"] {
        let (app, _) = test_app();
        let (status, body) = get(app, uri).await;
        assert_eq!(status, StatusCode::OK, "{} failed: {}", uri, body);
        assert!(body.contains("</html>"), "{} did not render fully", uri);
    }
}

#[tokio::test]
async fn test_about_page_lists_team_with_portraits() {
    let (app, _) = test_app();
    let (_, body) = get(app, "/about").await;

    assert!(body.contains("Sarah Johnson"));
    assert!(body.contains("professional-woman"));
    assert!(body.contains("500+"));
}

#[tokio::test]
async fn test_contact_page_offers_services() {
    let (app, _) = test_app();
    let (_, body) = get(app, "/contact").await;

    assert!(body.contains("Cloud Migration &amp; Architecture"));
    assert!(body.contains("Monday - Friday: 9:00 AM - 6:00 PM"));
}

#[tokio::test]
async fn test_unknown_page_is_404() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/careers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// Contact form
// =============================================================================

#[tokio::test]
async fn test_contact_form_redirects_and_sends_email() {
    let (app, mut emails) = test_app();
    let response = app.oneshot(form_request(VALID_FORM)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/contact/success");

    let job = tokio::time::timeout(Duration::from_secs(5), emails.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(job.to, "owner@hst.test");
    assert_eq!(job.subject, "New Contact Form Submission - Technology Strategy");
    assert_eq!(job.reply_to.as_deref(), Some("jane@example.com"));
    assert!(job.body.contains("Company: Not provided"));
}

#[tokio::test]
async fn test_invalid_contact_form_rerenders_with_error() {
    let (app, mut emails) = test_app();
    let body = "name=Jane+Smith&email=not-an-email&service=Technology+Strategy&message=short";
    let response = app.oneshot(form_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&html);

    assert!(html.contains("Please check your form data and try again."));
    assert!(html.contains("Invalid email format"));
    assert!(html.contains(r#"value="Jane Smith""#));
    assert!(emails.try_recv().is_err());
}

#[tokio::test]
async fn test_contact_api_accepts_json() {
    let (app, mut emails) = test_app();
    let request = json_request(
        "/api/v1/contact",
        serde_json::json!({
            "name": "  John Doe ",
            "email": "john.doe@example.com",
            "phone": "+353 1 234 5678",
            "service": "Data Analytics & AI",
            "message": "Please send details about your analytics practice."
        }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);

    let job = tokio::time::timeout(Duration::from_secs(5), emails.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(job.body.contains("Name: John Doe\n"));
}

#[tokio::test]
async fn test_contact_api_rejects_invalid_json() {
    let (app, _) = test_app();
    let request = json_request(
        "/api/v1/contact",
        serde_json::json!({ "name": "J", "email": "john@example.com", "service": "X", "message": "Hi" }),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Assets and docs
// =============================================================================

#[tokio::test]
async fn test_placeholder_svg() {
    let (app, _) = test_app();
    let response = app
        .oneshot(Request::get("/placeholders/300x200.svg").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).contains(r#"width="300" height="200""#));
}

#[tokio::test]
async fn test_placeholder_rejects_bad_size() {
    let (app, _) = test_app();
    let (status, _) = get(app, "/placeholders/0x200.svg").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_static_files_served() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/static/css/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(".site-header"));
}

#[tokio::test]
async fn test_openapi_document_uses_settings() {
    let (app, _) = test_app();
    let (status, body) = get(app, "/admin/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(doc["info"]["version"], "9.9.9");
    assert_eq!(doc["servers"][0]["url"], "/api/v1");
    assert!(doc["paths"]["/contact"]["post"].is_object());
    assert!(doc["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn test_large_pages_are_gzipped() {
    let (app, _) = test_app();
    let response = app
        .oneshot(
            Request::get("/services")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
}

// =============================================================================
// CORS
// =============================================================================

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/contact")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_wildcard_cors_without_credentials() {
    let (app, _) = test_app();
    let response = app.oneshot(preflight("https://anywhere.example")).await.unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
}

#[tokio::test]
async fn test_explicit_cors_origins() {
    let (app, _) = test_app_with(&[("CORS_ORIGINS", "https://hst.ie, https://www.hst.ie")]);

    let response = app.clone().oneshot(preflight("https://www.hst.ie")).await.unwrap();
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://www.hst.ie");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    let response = app.oneshot(preflight("https://evil.example")).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
