use std::sync::Arc;

use crate::{
    db::documents::DocumentStore,
    repositories::{
        contact::ContactRepository,
        health::StoreHealth,
        project::ProjectRepository,
        skill::SkillRepository,
        sqlx_repo::{SqlxContactRepo, SqlxProjectRepo, SqlxSkillRepo},
    },
};

/// The store-facing half of the application state.
#[derive(Clone)]
pub struct SharedRepositories {
    pub contact_repo: Arc<dyn ContactRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub skill_repo: Arc<dyn SkillRepository>,
    pub store_health: Arc<dyn StoreHealth>,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let store = DocumentStore::new(pool);

        SharedRepositories {
            contact_repo: Arc::new(SqlxContactRepo::new(store.clone())),
            project_repo: Arc::new(SqlxProjectRepo::new(store.clone())),
            skill_repo: Arc::new(SqlxSkillRepo::new(store.clone())),
            store_health: Arc::new(store),
        }
    }
}
