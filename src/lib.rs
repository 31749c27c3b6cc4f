use std::sync::Arc;

use zeroize::Zeroizing;

mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{db, mail, utils};

use repositories::{health::StoreHealth, mail::MailRelay};
use shared_repos::SharedRepositories;
use use_cases::{contact::ContactHandler, projects::ProjectHandler, skills::SkillHandler};
use utils::secret::secrets_match;

pub struct AppState {
    pub contact_handler: ContactHandler,
    pub project_handler: ProjectHandler,
    pub skill_handler: SkillHandler,
    pub store_health: Arc<dyn StoreHealth>,
    admin_api_key: Zeroizing<String>,
}

impl AppState {
    pub fn new(
        config: &settings::AppConfig,
        repos: SharedRepositories,
        mail_relay: Arc<dyn MailRelay>,
    ) -> Self {
        let contact_handler = ContactHandler::new(
            repos.contact_repo,
            mail_relay,
            config.mail_operator_address.clone(),
        );

        AppState {
            contact_handler,
            project_handler: ProjectHandler::new(repos.project_repo),
            skill_handler: SkillHandler::new(repos.skill_repo),
            store_health: repos.store_health,
            admin_api_key: Zeroizing::new(config.admin_api_key.clone()),
        }
    }

    pub fn admin_key_matches(&self, presented: &str) -> bool {
        !self.admin_api_key.is_empty()
            && secrets_match(presented.as_bytes(), self.admin_api_key.as_bytes())
    }
}
