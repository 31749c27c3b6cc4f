use async_trait::async_trait;

use crate::{db::documents::DocumentStore, errors::AppError};

#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
}

#[async_trait]
impl StoreHealth for DocumentStore {
    async fn check_connection(&self) -> Result<(), AppError> {
        self.ping().await
    }
}
