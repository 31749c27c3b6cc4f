use std::sync::Arc;

use crate::{
    entities::{record::MessageResponse, skill::{Skill, SkillRecord}},
    errors::AppError,
    repositories::skill::SkillRepository,
    utils::record_id::parse_record_id,
};

pub struct SkillHandler {
    pub skill_repo: Arc<dyn SkillRepository>,
}

impl SkillHandler {
    pub fn new(skill_repo: Arc<dyn SkillRepository>) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn list_skills(&self) -> Result<Vec<SkillRecord>, AppError> {
        self.skill_repo
            .list_skills()
            .await
            .map_err(|e| e.reported("❌ Error fetching skills"))
    }

    pub async fn create_skill(&self, skill: Skill) -> Result<MessageResponse, AppError> {
        let id = self.skill_repo
            .create_skill(&skill)
            .await
            .map_err(|e| e.reported("❌ Error adding skill"))?;
        tracing::info!(skill_id = %id, "Skill added");

        Ok(MessageResponse::new("✅ Skill added"))
    }

    pub async fn delete_skill(&self, id: &str) -> Result<MessageResponse, AppError> {
        match parse_record_id(id) {
            Some(valid_id) => {
                let removed = self.skill_repo
                    .delete_skill(&valid_id)
                    .await
                    .map_err(|e| e.reported("❌ Error deleting skill"))?;
                tracing::info!(skill_id = %valid_id, removed, "Skill delete requested");
            }
            None => tracing::debug!(skill_id = id, "Ignoring delete of malformed skill id"),
        }

        Ok(MessageResponse::new("✅ Skill deleted"))
    }
}
