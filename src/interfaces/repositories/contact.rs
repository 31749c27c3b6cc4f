use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    db::documents::{Collection, DocumentStore},
    entities::contact::Contact,
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(&self, contact: &Contact) -> Result<Uuid, AppError>;
    async fn mark_notified(&self, id: &Uuid, at: DateTime<Utc>) -> Result<(), AppError>;
}

impl SqlxContactRepo {
    pub fn new(store: DocumentStore) -> Self {
        SqlxContactRepo { store }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact(&self, contact: &Contact) -> Result<Uuid, AppError> {
        self.store.insert(Collection::Contacts, contact).await
    }

    async fn mark_notified(&self, id: &Uuid, at: DateTime<Utc>) -> Result<(), AppError> {
        let patch = serde_json::json!({ "notifiedAt": at });
        if !self.store.merge(Collection::Contacts, id, patch).await? {
            tracing::warn!(contact_id = %id, "Contact vanished before it could be marked notified");
        }
        Ok(())
    }
}
