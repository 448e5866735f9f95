//! Contact form entity and its validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::config::MIN_PHONE_DIGITS;

/// Contact form submission.
///
/// Free-text fields are trimmed while deserializing and blank optional
/// fields become `None`. Missing fields deserialize as empty so that an
/// incomplete HTML form is reported through validation rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
#[validate(schema(function = "validate_phone_digits"))]
pub struct ContactForm {
    /// Full name
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address
    #[serde(deserialize_with = "trimmed")]
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    /// Company name
    #[serde(deserialize_with = "trimmed_option")]
    #[validate(length(max = 100, message = "Company name must be at most 100 characters"))]
    #[schema(example = "Tech Corp")]
    pub company: Option<String>,
    /// Phone number
    #[serde(deserialize_with = "trimmed_option")]
    #[validate(length(max = 20, message = "Phone number must be at most 20 characters"))]
    #[schema(example = "+353 1 234 5678")]
    pub phone: Option<String>,
    /// Service of interest
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Please choose a service"))]
    #[schema(example = "Technology Consulting")]
    pub service: String,
    /// Message content
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 10,
        max = 2000,
        message = "Message must be between 10 and 2000 characters"
    ))]
    #[schema(example = "I'm interested in your technology consulting services.")]
    pub message: String,
}

impl ContactForm {
    /// Subject line used for the notification email.
    pub fn email_subject(&self) -> String {
        format!("New Contact Form Submission - {}", self.service)
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

fn trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

fn validate_phone_digits(form: &ContactForm) -> Result<(), ValidationError> {
    let Some(phone) = form.phone.as_deref() else {
        return Ok(());
    };

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits < MIN_PHONE_DIGITS {
        let mut error = ValidationError::new("phone_too_short");
        error.message = Some("Phone number too short".into());
        return Err(error);
    }
    Ok(())
}

/// Result of a contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    pub success: bool,
    #[schema(example = "Thank you for your message. We'll get back to you soon!")]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ContactResponse {
    pub fn received() -> Self {
        Self {
            success: true,
            message: "Thank you for your message. We'll get back to you soon!".to_string(),
            timestamp: Utc::now(),
        }
    }
}
