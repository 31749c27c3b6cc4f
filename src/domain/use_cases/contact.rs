use std::sync::Arc;

use chrono::Utc;

use crate::{
    entities::{contact::{ContactSubmission, OutboundMail}, record::MessageResponse},
    errors::AppError,
    repositories::{contact::ContactRepository, mail::MailRelay},
};

pub const CONTACT_RECEIVED: &str = "✅ Message saved & Email sent";

pub struct ContactHandler {
    pub contact_repo: Arc<dyn ContactRepository>,
    pub mail_relay: Arc<dyn MailRelay>,
    pub operator_address: String,
}

impl ContactHandler {
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        mail_relay: Arc<dyn MailRelay>,
        operator_address: impl Into<String>,
    ) -> Self {
        ContactHandler {
            contact_repo,
            mail_relay,
            operator_address: operator_address.into(),
        }
    }

    /// Stores the submission, then notifies the operator.
    ///
    /// The stored contact is kept when the mail cannot be sent; it simply
    /// never receives its `notifiedAt` stamp, and the caller gets the error.
    pub async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<MessageResponse, AppError> {
        let contact = submission.into_contact(Utc::now());

        let id = self.contact_repo.create_contact(&contact).await?;
        tracing::info!(contact_id = %id, "Contact message stored");

        let mail = OutboundMail::contact_notification(&contact, &self.operator_address);
        if let Err(e) = self.mail_relay.send(&mail).await {
            tracing::error!(contact_id = %id, error = %e, "Operator notification failed, contact left un-notified");
            return Err(e.into());
        }

        // Mail already delivered, a failed stamp is only logged
        if let Err(e) = self.contact_repo.mark_notified(&id, Utc::now()).await {
            tracing::error!(contact_id = %id, error = %e, "Failed to mark contact as notified");
        }

        Ok(MessageResponse::new(CONTACT_RECEIVED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;
    use uuid::Uuid;

    use crate::{
        errors::MailError,
        repositories::{contact::MockContactRepository, mail::MockMailRelay},
    };

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            message: Some("Hello there".into()),
        }
    }

    #[tokio::test]
    async fn stores_then_notifies_then_stamps() {
        let id = Uuid::new_v4();
        let mut repo = MockContactRepository::new();
        let mut relay = MockMailRelay::new();

        repo.expect_create_contact()
            .withf(|c| c.name.as_deref() == Some("Ada") && c.notified_at.is_none())
            .times(1)
            .returning(move |_| Ok(id));
        relay.expect_send()
            .withf(|m| m.to == "owner@example.com" && m.subject == "📩 Contact from Ada")
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_mark_notified()
            .with(eq(id), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let handler = ContactHandler::new(Arc::new(repo), Arc::new(relay), "owner@example.com");
        let response = handler.submit_contact(submission()).await.unwrap();

        assert_eq!(response.message, CONTACT_RECEIVED);
    }

    #[tokio::test]
    async fn store_failure_skips_mail() {
        let mut repo = MockContactRepository::new();
        let mut relay = MockMailRelay::new();

        repo.expect_create_contact()
            .returning(|_| Err(AppError::StoreError("connection reset".into())));
        relay.expect_send().never();
        repo.expect_mark_notified().never();

        let handler = ContactHandler::new(Arc::new(repo), Arc::new(relay), "owner@example.com");
        let result = handler.submit_contact(submission()).await;

        assert!(matches!(result, Err(AppError::StoreError(_))));
    }

    #[tokio::test]
    async fn mail_failure_reports_error_and_keeps_contact_unstamped() {
        let mut repo = MockContactRepository::new();
        let mut relay = MockMailRelay::new();

        repo.expect_create_contact()
            .times(1)
            .returning(|_| Ok(Uuid::new_v4()));
        relay.expect_send()
            .returning(|_| Err(MailError::Transport("timed out".into())));
        repo.expect_mark_notified().never();

        let handler = ContactHandler::new(Arc::new(repo), Arc::new(relay), "owner@example.com");
        let result = handler.submit_contact(submission()).await;

        assert!(matches!(result, Err(AppError::MailError(_))));
    }

    #[tokio::test]
    async fn failed_stamp_still_succeeds() {
        let mut repo = MockContactRepository::new();
        let mut relay = MockMailRelay::new();

        repo.expect_create_contact().returning(|_| Ok(Uuid::new_v4()));
        relay.expect_send().returning(|_| Ok(()));
        repo.expect_mark_notified()
            .returning(|_, _| Err(AppError::StoreError("gone".into())));

        let handler = ContactHandler::new(Arc::new(repo), Arc::new(relay), "owner@example.com");

        assert!(handler.submit_contact(submission()).await.is_ok());
    }

    #[tokio::test]
    async fn malformed_email_is_stored_as_is() {
        let mut repo = MockContactRepository::new();
        let mut relay = MockMailRelay::new();

        repo.expect_create_contact()
            .withf(|c| c.email.as_deref() == Some("not-an-email"))
            .times(1)
            .returning(|_| Ok(Uuid::new_v4()));
        relay.expect_send().returning(|_| Ok(()));
        repo.expect_mark_notified().returning(|_, _| Ok(()));

        let handler = ContactHandler::new(Arc::new(repo), Arc::new(relay), "owner@example.com");
        let submission = ContactSubmission {
            email: Some("not-an-email".into()),
            ..submission()
        };

        assert!(handler.submit_contact(submission).await.is_ok());
    }
}
