//! Contact form payload, its validation rules, and the endpoint reply shape.
//!
//! The browser validates before sending and the preview server validates again
//! on receipt; both go through [`ContactForm::validate`] so the two sides can
//! never disagree about what a complete submission is.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shown after a submission is accepted.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";
/// Shown when the POST fails without a server-supplied message.
pub const NETWORK_ERROR_MESSAGE: &str = "Network or server error.";
/// Shown when the submission could not be recorded locally.
pub const SAVE_FAILED_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

/// Status value the endpoint uses to signal acceptance.
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Why a contact form was rejected before sending.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// One or more required fields are blank.
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<&'static str>),
    /// The email field does not look like an address.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// The four fields of the community contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub const FIELD_NAMES: [&'static str; 4] = ["name", "email", "subject", "message"];

    /// Build a form from a raw field map, ignoring unknown fields.
    #[must_use]
    pub fn from_fields(fields: &BTreeMap<String, String>) -> Self {
        let field = |name: &str| fields.get(name).cloned().unwrap_or_default();
        Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
        }
    }

    /// The form as a field map, in the shape the submission log stores.
    #[must_use]
    pub fn to_fields(&self) -> BTreeMap<String, String> {
        Self::FIELD_NAMES
            .into_iter()
            .zip([&self.name, &self.email, &self.subject, &self.message])
            .map(|(name, value)| (name.to_owned(), value.clone()))
            .collect()
    }

    /// Check required fields, then the email shape.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] listing every blank field, or
    /// [`ContactError::InvalidEmail`] when all fields are present but the
    /// email is malformed.
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing: Vec<&'static str> = Self::FIELD_NAMES
            .into_iter()
            .zip([&self.name, &self.email, &self.subject, &self.message])
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// Loose email check: something, `@`, something, `.`, something, no spaces.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|pattern| pattern.is_match(email.trim()))
}

/// JSON body returned by the form submission endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmitResponse {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { status: STATUS_SUCCESS.to_owned(), message: Some(message.into()) }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { status: STATUS_ERROR.to_owned(), message: Some(message.into()) }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
