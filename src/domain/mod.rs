//! Domain layer - Site content and the contact form.

pub mod contact;
pub mod content;

pub use contact::{ContactForm, ContactResponse};
