use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{client::api::PortfolioApi, entities::contact::ContactSubmission};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

pub const INVALID_FORM_NOTICE: &str = "Please fill all required fields correctly";
pub const SENT_NOTICE: &str = "Message sent successfully! I’ll reply within 24-48 hours.";
pub const FAILED_NOTICE: &str = "Error sending message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

pub type FormErrors = BTreeMap<ContactField, &'static str>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side checks failed; nothing was sent.
    Invalid,
    Sent,
    Failed,
}

impl SubmitOutcome {
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Invalid => INVALID_FORM_NOTICE,
            SubmitOutcome::Sent => SENT_NOTICE,
            SubmitOutcome::Failed => FAILED_NOTICE,
        }
    }
}

/// Local state of the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    errors: FormErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(ContactField::Email, "Invalid email format");
        }
        if self.message.trim().is_empty() {
            errors.insert(ContactField::Message, "Message is required");
        }

        errors
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Validates, sends, and clears the form once the server accepted it.
    /// Invalid input never reaches the network; a failed send keeps the
    /// typed values.
    pub async fn submit(&mut self, api: &dyn PortfolioApi) -> SubmitOutcome {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }

        let submission = ContactSubmission {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            message: Some(self.message.clone()),
        };

        match api.submit_contact(&submission).await {
            Ok(_) => {
                *self = ContactForm::default();
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                SubmitOutcome::Failed
            }
        }
    }
}
