//! Email background job.
//!
//! Contact form notifications are sent over SMTP (STARTTLS) when both
//! `SMTP_USERNAME` and `SMTP_PASSWORD` are configured. Otherwise the
//! submission is written to the log so nothing is lost in development.

use std::sync::Arc;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

#[cfg(test)]
use mockall::automock;

use crate::config::SmtpConfig;
use crate::domain::ContactForm;
use crate::errors::{AppError, AppResult};

/// Email job payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailJob {
    /// Recipient email address
    pub to: String,
    /// Email subject line
    pub subject: String,
    /// Plain text body
    pub body: String,
    /// Optional sender override (defaults to SMTP_USERNAME)
    #[serde(default)]
    pub from: Option<String>,
    /// Address replies should go to
    #[serde(default)]
    pub reply_to: Option<String>,
}

impl EmailJob {
    /// Create a new email job
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: None,
            reply_to: None,
        }
    }

    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    /// Notification sent to the site owner for a contact form submission.
    pub fn contact_notification(form: &ContactForm, to: &str, site_name: &str) -> Self {
        let body = format!(
            "New contact form submission received:\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Company: {company}\n\
             Phone: {phone}\n\
             Service Interest: {service}\n\
             \n\
             Message:\n\
             {message}\n\
             \n\
             ---\n\
             Sent from {site_name} Website\n",
            name = form.name,
            email = form.email,
            company = form.company.as_deref().unwrap_or("Not provided"),
            phone = form.phone.as_deref().unwrap_or("Not provided"),
            service = form.service,
            message = form.message,
            site_name = site_name,
        );

        Self::new(to, form.email_subject(), body).with_reply_to(form.email.clone())
    }
}

/// Outbound mail transport.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, job: EmailJob) -> AppResult<()>;
}

/// SMTP mailer; falls back to logging when credentials are missing.
pub struct SmtpMailer {
    sender: Option<String>,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    pub fn from_settings(config: &SmtpConfig) -> AppResult<Self> {
        let (Some(username), Some(password)) = (config.username.as_deref(), config.password()) else {
            return Ok(Self {
                sender: None,
                transport: None,
            });
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)
            .map_err(|e| AppError::email(format!("Invalid SMTP server {}: {}", config.server, e)))?
            .port(config.port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        Ok(Self {
            sender: Some(username.to_string()),
            transport: Some(transport),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, job: EmailJob) -> AppResult<()> {
        let Some(transport) = &self.transport else {
            tracing::warn!("SMTP credentials not configured, logging email instead");
            log_email(&job);
            return Ok(());
        };

        let from = job
            .from
            .as_deref()
            .or(self.sender.as_deref())
            .unwrap_or_default();

        tracing::info!(to = %job.to, from = %from, subject = %job.subject, "Processing email job");

        let message = build_message(&job, from)?;
        match transport.send(message).await {
            Ok(_) => {
                tracing::info!(to = %job.to, "Email sent");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error sending email");
                log_email(&job);
                Err(AppError::email(e.to_string()))
            }
        }
    }
}

fn parse_mailbox(address: &str, role: &str) -> AppResult<Mailbox> {
    address
        .parse()
        .map_err(|e| AppError::email(format!("Invalid {} address {:?}: {}", role, address, e)))
}

fn build_message(job: &EmailJob, from: &str) -> AppResult<Message> {
    let mut builder = Message::builder()
        .from(parse_mailbox(from, "sender")?)
        .to(parse_mailbox(&job.to, "recipient")?)
        .subject(job.subject.as_str())
        .header(ContentType::TEXT_PLAIN);

    if let Some(reply_to) = job.reply_to.as_deref() {
        builder = builder.reply_to(parse_mailbox(reply_to, "reply-to")?);
    }

    builder
        .body(job.body.clone())
        .map_err(|e| AppError::email(e.to_string()))
}

fn log_email(job: &EmailJob) {
    tracing::info!(
        "=== EMAIL (not sent) ===\n\
         To: {}\n\
         Reply-To: {}\n\
         Subject: {}\n\
         Body:\n{}\n\
         ========================",
        job.to,
        job.reply_to.as_deref().unwrap_or("-"),
        job.subject,
        job.body
    );
}

/// Send `job` on a background task; failures are logged, never propagated.
pub fn dispatch(mailer: Arc<dyn Mailer>, job: EmailJob) -> JoinHandle<()> {
    tokio::spawn(async move {
        let to = job.to.clone();
        if let Err(e) = mailer.send(job).await {
            tracing::error!(to = %to, error = %e, "Email job failed");
        }
    })
}
