use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::documents::{Collection, DocumentStore},
    entities::skill::{Skill, SkillRecord},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, AppError>;
    async fn create_skill(&self, skill: &Skill) -> Result<Uuid, AppError>;
    /// Returns whether a skill was removed.
    async fn delete_skill(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxSkillRepo {
    pub fn new(store: DocumentStore) -> Self {
        SqlxSkillRepo { store }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, AppError> {
        self.store.find_all(Collection::Skills).await
    }

    async fn create_skill(&self, skill: &Skill) -> Result<Uuid, AppError> {
        self.store.insert(Collection::Skills, skill).await
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<bool, AppError> {
        self.store.delete(Collection::Skills, id).await
    }
}
