use async_trait::async_trait;

use crate::{entities::contact::OutboundMail, errors::MailError};

/// Outbound transactional mail.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<(), MailError>;
}
