use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::documents::{Collection, DocumentStore},
    entities::project::{Project, ProjectRecord},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, AppError>;
    async fn create_project(&self, project: &Project) -> Result<Uuid, AppError>;
    /// Returns whether a project was removed.
    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(store: DocumentStore) -> Self {
        SqlxProjectRepo { store }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<ProjectRecord>, AppError> {
        self.store.find_all(Collection::Projects).await
    }

    async fn create_project(&self, project: &Project) -> Result<Uuid, AppError> {
        self.store.insert(Collection::Projects, project).await
    }

    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError> {
        self.store.delete(Collection::Projects, id).await
    }
}
