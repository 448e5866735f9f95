//! Background jobs.

pub mod email_job;

pub use email_job::{dispatch, EmailJob, Mailer, SmtpMailer};
