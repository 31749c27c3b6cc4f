use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use zeroize::Zeroizing;

use crate::{
    entities::contact::OutboundMail,
    errors::MailError,
    repositories::mail::MailRelay,
    settings::AppConfig,
};

/// Sends mail through an HTTP transactional-mail API (JSON body, bearer key).
pub struct HttpMailRelay {
    client: Client,
    endpoint: String,
    api_key: Zeroizing<String>,
    from: String,
}

#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    text: &'a str,
}

impl HttpMailRelay {
    pub fn new(config: &AppConfig) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(config.mail_timeout())
            .build()?;

        Ok(HttpMailRelay {
            client,
            endpoint: config.mail_api_url.clone(),
            api_key: Zeroizing::new(config.mail_api_key.clone()),
            from: config.mail_from.clone(),
        })
    }
}

#[async_trait]
impl MailRelay for HttpMailRelay {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailError> {
        let request = SendMailRequest {
            from: &self.from,
            to: [&mail.to],
            reply_to: mail.reply_to.as_deref(),
            subject: &mail.subject,
            text: &mail.text,
        };

        let response = self.client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected { status: status.as_u16(), body });
        }

        tracing::debug!(to = %mail.to, "Mail accepted by relay");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_mail_api_shape() {
        let request = SendMailRequest {
            from: "Portfolio <noreply@example.com>",
            to: ["owner@example.com"],
            reply_to: Some("ada@example.com"),
            subject: "📩 Contact from Ada",
            text: "Name: Ada",
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "from": "Portfolio <noreply@example.com>",
                "to": ["owner@example.com"],
                "reply_to": "ada@example.com",
                "subject": "📩 Contact from Ada",
                "text": "Name: Ada"
            })
        );
    }

    #[test]
    fn omits_missing_reply_to() {
        let request = SendMailRequest {
            from: "noreply@example.com",
            to: ["owner@example.com"],
            reply_to: None,
            subject: "s",
            text: "t",
        };

        assert!(serde_json::to_value(&request).unwrap().get("reply_to").is_none());
    }
}
