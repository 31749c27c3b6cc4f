use crate::{
    client::api::PortfolioApi,
    entities::{project::Project, skill::Skill},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOutcome {
    Added,
    Failed,
}

/// Draft behind the "Add Project" form. Fields are sent as typed, empty
/// strings included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub github_link: String,
    pub live_link: String,
}

impl ProjectDraft {
    pub fn to_project(&self) -> Project {
        Project {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            github_link: Some(self.github_link.clone()),
            live_link: Some(self.live_link.clone()),
            ..Default::default()
        }
    }

    /// Resets on success. Listings are not refreshed.
    pub async fn submit(&mut self, api: &dyn PortfolioApi) -> AdminOutcome {
        match api.create_project(&self.to_project()).await {
            Ok(_) => {
                *self = ProjectDraft::default();
                AdminOutcome::Added
            }
            Err(e) => {
                tracing::warn!("Adding project failed: {}", e);
                AdminOutcome::Failed
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillDraft {
    pub name: String,
    /// Icon identifier, e.g. `FaReact`
    pub icon: String,
}

impl SkillDraft {
    pub fn to_skill(&self) -> Skill {
        Skill {
            name: Some(self.name.clone()),
            icon: Some(self.icon.clone()),
            ..Default::default()
        }
    }

    pub async fn submit(&mut self, api: &dyn PortfolioApi) -> AdminOutcome {
        match api.create_skill(&self.to_skill()).await {
            Ok(_) => {
                *self = SkillDraft::default();
                AdminOutcome::Added
            }
            Err(e) => {
                tracing::warn!("Adding skill failed: {}", e);
                AdminOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::api::{ClientError, MockPortfolioApi},
        entities::record::MessageResponse,
    };

    #[tokio::test]
    async fn project_draft_resets_after_add() {
        let mut api = MockPortfolioApi::new();
        api.expect_create_project()
            .withf(|p| p.title.as_deref() == Some("Portfolio") && p.tech.is_empty())
            .times(1)
            .returning(|_| Ok(MessageResponse::new("✅ Project added")));
        api.expect_fetch_projects().never();

        let mut draft = ProjectDraft {
            title: "Portfolio".into(),
            description: "This site".into(),
            ..Default::default()
        };

        assert_eq!(draft.submit(&api).await, AdminOutcome::Added);
        assert_eq!(draft, ProjectDraft::default());
    }

    #[tokio::test]
    async fn rejected_skill_keeps_draft() {
        let mut api = MockPortfolioApi::new();
        api.expect_create_skill().returning(|_| {
            Err(ClientError::Status { status: 401, message: "Unauthorized".into() })
        });

        let mut draft = SkillDraft { name: "Rust".into(), icon: "FaRust".into() };

        assert_eq!(draft.submit(&api).await, AdminOutcome::Failed);
        assert_eq!(draft.icon, "FaRust");
    }
}
