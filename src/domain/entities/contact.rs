use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::lenient;

/// Body of `POST /api/contact`. Nothing is enforced server-side; missing
/// fields are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    pub date: DateTime<Utc>,

    /// Set once the operator notification was delivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notified_at: Option<DateTime<Utc>>,
}

impl ContactSubmission {
    pub fn into_contact(self, date: DateTime<Utc>) -> Contact {
        Contact {
            name: self.name,
            email: self.email,
            message: self.message,
            date,
            notified_at: None,
        }
    }
}

/// A mail addressed to the site operator. The sending identity is supplied by
/// the relay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundMail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text: String,
}

impl OutboundMail {
    pub fn contact_notification(contact: &Contact, operator: &str) -> Self {
        let name = contact.name.as_deref().unwrap_or_default();
        let email = contact.email.as_deref().unwrap_or_default();
        let message = contact.message.as_deref().unwrap_or_default();

        OutboundMail {
            to: operator.to_string(),
            reply_to: contact.email.clone().filter(|e| !e.trim().is_empty()),
            subject: format!("📩 Contact from {}", name),
            text: format!("Name: {}\nEmail: {}\n\nMessage:\n{}", name, email, message),
        }
    }
}
