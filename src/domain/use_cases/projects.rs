use std::sync::Arc;

use crate::{
    entities::{project::{Project, ProjectRecord}, record::MessageResponse},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::record_id::parse_record_id,
};

pub struct ProjectHandler {
    pub project_repo: Arc<dyn ProjectRepository>,
}

impl ProjectHandler {
    pub fn new(project_repo: Arc<dyn ProjectRepository>) -> Self {
        ProjectHandler { project_repo }
    }

    /// All projects in insertion order
    pub async fn list_projects(&self) -> Result<Vec<ProjectRecord>, AppError> {
        self.project_repo
            .list_projects()
            .await
            .map_err(|e| e.reported("❌ Error fetching projects"))
    }

    pub async fn create_project(&self, project: Project) -> Result<MessageResponse, AppError> {
        let id = self.project_repo
            .create_project(&project)
            .await
            .map_err(|e| e.reported("❌ Error adding project"))?;
        tracing::info!(project_id = %id, "Project added");

        Ok(MessageResponse::new("✅ Project added"))
    }

    /// Deleting an unknown id is not an error.
    pub async fn delete_project(&self, id: &str) -> Result<MessageResponse, AppError> {
        match parse_record_id(id) {
            Some(valid_id) => {
                let removed = self.project_repo
                    .delete_project(&valid_id)
                    .await
                    .map_err(|e| e.reported("❌ Error deleting project"))?;
                tracing::info!(project_id = %valid_id, removed, "Project delete requested");
            }
            None => tracing::debug!(project_id = id, "Ignoring delete of malformed project id"),
        }

        Ok(MessageResponse::new("✅ Project deleted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;
    use uuid::Uuid;

    use crate::{entities::record::Record, repositories::project::MockProjectRepository};

    #[tokio::test]
    async fn lists_in_repository_order() {
        let mut repo = MockProjectRepository::new();
        let first = Record::new(Uuid::new_v4(), Project { title: Some("A".into()), ..Default::default() });
        let second = Record::new(Uuid::new_v4(), Project { title: Some("B".into()), ..Default::default() });
        let records = vec![first.clone(), second.clone()];

        repo.expect_list_projects().returning(move || Ok(records.clone()));

        let handler = ProjectHandler::new(Arc::new(repo));
        assert_eq!(handler.list_projects().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn creates_project_verbatim() {
        let mut repo = MockProjectRepository::new();
        repo.expect_create_project()
            .withf(|p| p.title.as_deref() == Some("X") && p.tech == ["A", "B"])
            .times(1)
            .returning(|_| Ok(Uuid::new_v4()));

        let handler = ProjectHandler::new(Arc::new(repo));
        let project = Project {
            title: Some("X".into()),
            tech: vec!["A".into(), "B".into()],
            ..Default::default()
        };

        assert_eq!(handler.create_project(project).await.unwrap().message, "✅ Project added");
    }

    #[tokio::test]
    async fn delete_of_missing_project_succeeds() {
        let id = Uuid::new_v4();
        let mut repo = MockProjectRepository::new();
        repo.expect_delete_project()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(false));

        let handler = ProjectHandler::new(Arc::new(repo));
        let response = handler.delete_project(&id.to_string()).await.unwrap();

        assert_eq!(response.message, "✅ Project deleted");
    }

    #[tokio::test]
    async fn delete_of_malformed_id_never_reaches_store() {
        let mut repo = MockProjectRepository::new();
        repo.expect_delete_project().never();

        let handler = ProjectHandler::new(Arc::new(repo));

        assert!(handler.delete_project("not-a-real-id").await.is_ok());
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .returning(|| Err(AppError::StoreError("down".into())));

        let handler = ProjectHandler::new(Arc::new(repo));

        assert!(matches!(
            handler.list_projects().await,
            Err(AppError::Reported { message: "❌ Error fetching projects", .. })
        ));
    }
}
