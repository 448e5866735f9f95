//! Contact form handlers.
//!
//! The HTML form posts to `/contact`; API clients post JSON to
//! `{API_PREFIX}/contact`. Both validate the submission and hand the
//! notification email to a background task.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    routing::post,
    Form, Router,
};
use validator::Validate;

use super::page_handler::render_contact;
use crate::api::extractors::{format_validation_errors, ValidatedJson};
use crate::api::AppState;
use crate::domain::{ContactForm, ContactResponse};
use crate::errors::AppResult;
use crate::jobs::{self, EmailJob};

/// Where the HTML form redirects after a successful submission
pub const CONTACT_SUCCESS_PATH: &str = "/contact/success";

/// Contact routes mounted under `API_PREFIX`
pub fn contact_api_routes() -> Router<AppState> {
    Router::new().route("/contact", post(create_contact))
}

fn queue_notification(state: &AppState, form: &ContactForm) {
    tracing::info!(name = %form.name, email = %form.email, service = %form.service, "Contact form submitted");

    let job = EmailJob::contact_notification(form, &state.settings.contact.email, &state.settings.app.name);
    jobs::dispatch(state.mailer.clone(), job);
}

/// Handle the HTML contact form
///
/// Valid submissions redirect to the success page with `303 See Other`;
/// invalid ones re-render the form with an error and the entered values.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let details = format_validation_errors(&errors);
        tracing::warn!(error = %details, "Contact form validation error");

        let message = format!("Please check your form data and try again. {}", details);
        let page = render_contact(&state, Some(message), Some(&form)).await?;
        return Ok(page.into_response());
    }

    queue_notification(&state, &form);
    Ok(Redirect::to(CONTACT_SUCCESS_PATH).into_response())
}

/// Submit a contact request
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    request_body = ContactForm,
    responses(
        (status = 201, description = "Submission accepted", body = ContactResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(form): ValidatedJson<ContactForm>,
) -> AppResult<(StatusCode, Json<ContactResponse>)> {
    queue_notification(&state, &form);
    Ok((StatusCode::CREATED, Json(ContactResponse::received())))
}
