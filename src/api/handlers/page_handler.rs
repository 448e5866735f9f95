//! HTML page handlers.
//!
//! Every page is rendered from `TEMPLATES_DIR` with the shared base context
//! (site name, contact details, current year) plus page-specific data.

use axum::{extract::State, response::Html, routing::get, Router};
use chrono::{Datelike, Utc};
use futures::future::join_all;
use serde::Serialize;

use super::contact_handler::submit_contact_form;
use crate::api::AppState;
use crate::config::{Settings, OFFICE_HOURS};
use crate::domain::content::{
    self, Article, CompanyStat, GallerySpec, ImageSpec, ServiceDetail, ServiceSummary, TeamMember,
};
use crate::domain::ContactForm;
use crate::errors::AppResult;
use crate::services::AssetService;

pub const HOME_TEMPLATE: &str = "pages/home.html";
pub const ABOUT_TEMPLATE: &str = "pages/about.html";
pub const SERVICES_TEMPLATE: &str = "pages/services.html";
pub const CONTACT_TEMPLATE: &str = "pages/contact.html";
pub const CONTACT_SUCCESS_TEMPLATE: &str = "pages/contact_success.html";
pub const BLOG_TEMPLATE: &str = "pages/blog.html";

/// Create page routes, including the HTML contact form submission.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/services", get(services))
        .route("/contact", get(contact).post(submit_contact_form))
        .route("/contact/success", get(contact_success))
        .route("/blog", get(blog))
}

/// Variables available to every template.
#[derive(Debug, Serialize)]
struct BaseContext<'a> {
    site_name: &'a str,
    site_description: &'a str,
    site_version: &'a str,
    current_year: i32,
    contact_email: &'a str,
    contact_phone: &'a str,
    company_address: &'a str,
    api_prefix: &'a str,
}

impl<'a> BaseContext<'a> {
    fn from_settings(settings: &'a Settings) -> Self {
        Self {
            site_name: &settings.app.name,
            site_description: &settings.app.description,
            site_version: &settings.app.version,
            current_year: Utc::now().year(),
            contact_email: &settings.contact.email,
            contact_phone: &settings.contact.phone,
            company_address: &settings.contact.address,
            api_prefix: &settings.server.api_prefix,
        }
    }
}

#[derive(Serialize)]
struct PageContext<'a, T: Serialize> {
    #[serde(flatten)]
    base: BaseContext<'a>,
    page_title: &'a str,
    page_description: &'a str,
    #[serde(flatten)]
    page: T,
}

/// Render `template` with the base context merged with `page`.
pub(crate) fn render<T: Serialize>(
    state: &AppState,
    template: &str,
    title: &str,
    description: &str,
    page: T,
) -> AppResult<Html<String>> {
    let context = PageContext {
        base: BaseContext::from_settings(&state.settings),
        page_title: title,
        page_description: description,
        page,
    };

    let html = state.templates.get_template(template)?.render(&context)?;
    Ok(Html(html))
}

async fn image(assets: &dyn AssetService, spec: ImageSpec) -> String {
    assets.get_image(spec.category, spec.width, spec.height).await
}

async fn gallery(assets: &dyn AssetService, spec: GallerySpec) -> Vec<String> {
    assets.get_gallery(spec.categories, spec.width, spec.height).await
}

/// Pair each card with the gallery image at the same position.
fn with_images<T>(items: &[T], images: Vec<String>) -> Vec<WithImage<T>>
where
    T: Copy,
{
    let mut images = images.into_iter();
    items
        .iter()
        .map(|item| WithImage {
            item: *item,
            image: images.next(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct WithImage<T> {
    #[serde(flatten)]
    item: T,
    image: Option<String>,
}

// =============================================================================
// Home
// =============================================================================

#[derive(Serialize)]
struct HomePage {
    hero_image: String,
    services_images: Vec<String>,
    services: Vec<WithImage<ServiceSummary>>,
}

/// Homepage with hero section and services overview
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let assets = state.assets.as_ref();
    let (hero_image, services_images) = tokio::join!(
        image(assets, content::HOME_HERO),
        gallery(assets, content::HOME_GALLERY),
    );

    let page = HomePage {
        hero_image,
        services: with_images(content::SERVICES, services_images.clone()),
        services_images,
    };

    render(
        &state,
        HOME_TEMPLATE,
        "Professional Technology Consulting Services",
        "Leading provider of technology consulting, digital transformation, and business strategy services",
        page,
    )
}

// =============================================================================
// About
// =============================================================================

#[derive(Serialize)]
struct AboutPage {
    team_hero: String,
    office_images: Vec<String>,
    team_members: Vec<WithImage<TeamMember>>,
    company_stats: &'static [CompanyStat],
}

/// About page with team information
pub async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    let assets = state.assets.as_ref();
    let portraits = join_all(content::TEAM.iter().map(|member| image(assets, member.portrait)));
    let (team_hero, office_images, portraits) = tokio::join!(
        image(assets, content::ABOUT_HERO),
        gallery(assets, content::ABOUT_GALLERY),
        portraits,
    );

    let page = AboutPage {
        team_hero,
        office_images,
        team_members: with_images(content::TEAM, portraits),
        company_stats: content::COMPANY_STATS,
    };

    render(
        &state,
        ABOUT_TEMPLATE,
        "About HST - Professional Technology Consultants",
        "Learn about our experienced team of technology consultants and business strategists",
        page,
    )
}

// =============================================================================
// Services
// =============================================================================

#[derive(Serialize)]
struct ServicesPage {
    services_hero: String,
    detailed_services: Vec<WithImage<ServiceDetail>>,
}

/// Services page with detailed service descriptions
pub async fn services(State(state): State<AppState>) -> AppResult<Html<String>> {
    let assets = state.assets.as_ref();
    let (services_hero, service_images) = tokio::join!(
        image(assets, content::SERVICES_HERO),
        gallery(assets, content::SERVICES_GALLERY),
    );

    let page = ServicesPage {
        services_hero,
        detailed_services: with_images(content::DETAILED_SERVICES, service_images),
    };

    render(
        &state,
        SERVICES_TEMPLATE,
        "Professional Technology Services - HST",
        "Comprehensive technology consulting services including cloud migration, digital transformation, and strategic planning",
        page,
    )
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Serialize)]
struct ContactInfo<'a> {
    address: &'a str,
    phone: &'a str,
    email: &'a str,
    hours: &'a str,
}

#[derive(Serialize)]
struct ContactPage<'a> {
    contact_hero: String,
    office_image: String,
    contact_info: ContactInfo<'a>,
    service_options: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form_data: Option<&'a ContactForm>,
}

/// Render the contact page, optionally with a submission error and the
/// values the visitor already entered.
pub(crate) async fn render_contact(
    state: &AppState,
    error: Option<String>,
    form_data: Option<&ContactForm>,
) -> AppResult<Html<String>> {
    let assets = state.assets.as_ref();
    let (contact_hero, office_image) = tokio::join!(
        image(assets, content::CONTACT_HERO),
        image(assets, content::CONTACT_OFFICE),
    );

    let settings = &state.settings;
    let page = ContactPage {
        contact_hero,
        office_image,
        contact_info: ContactInfo {
            address: &settings.contact.address,
            phone: &settings.contact.phone,
            email: &settings.contact.email,
            hours: OFFICE_HOURS,
        },
        service_options: content::service_options().collect(),
        error,
        form_data,
    };

    render(
        state,
        CONTACT_TEMPLATE,
        "Contact HST - Get Professional Consulting",
        "Contact our team of professional technology consultants for your next project",
        page,
    )
}

/// Contact page with contact form
pub async fn contact(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_contact(&state, None, None).await
}

#[derive(Serialize)]
struct NoPageData {}

/// Contact form success page
pub async fn contact_success(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(
        &state,
        CONTACT_SUCCESS_TEMPLATE,
        "Thank You - HST Professional Services",
        "Thank you for contacting HST Professional Services",
        NoPageData {},
    )
}

// =============================================================================
// Blog
// =============================================================================

#[derive(Serialize)]
struct BlogPage {
    blog_hero: String,
    featured_articles: Vec<WithImage<Article>>,
}

/// Blog/insights page
pub async fn blog(State(state): State<AppState>) -> AppResult<Html<String>> {
    let assets = state.assets.as_ref();
    let (blog_hero, article_images) = tokio::join!(
        image(assets, content::BLOG_HERO),
        gallery(assets, content::BLOG_GALLERY),
    );

    let page = BlogPage {
        blog_hero,
        featured_articles: with_images(content::FEATURED_ARTICLES, article_images),
    };

    render(
        &state,
        BLOG_TEMPLATE,
        "Technology Insights & Blog - HST",
        "Latest insights on technology trends, business strategy, and digital transformation",
        page,
    )
}
