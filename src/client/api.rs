use async_trait::async_trait;
use derive_more::Display;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;
use zeroize::Zeroizing;

use crate::{
    constants::ADMIN_KEY_HEADER,
    entities::{
        contact::ContactSubmission,
        project::{Project, ProjectRecord},
        record::MessageResponse,
        skill::{Skill, SkillRecord},
    },
};

#[derive(Debug, Display)]
pub enum ClientError {
    #[display("Invalid API URL: {_0}")]
    InvalidUrl(String),

    #[display("Request failed: {_0}")]
    Transport(String),

    #[display("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[display("Admin key not configured")]
    MissingAdminKey,
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

/// Everything the site's sections and admin panel ask of the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, ClientError>;
    async fn fetch_skills(&self) -> Result<Vec<SkillRecord>, ClientError>;
    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<MessageResponse, ClientError>;
    async fn create_project(&self, project: &Project) -> Result<MessageResponse, ClientError>;
    async fn create_skill(&self, skill: &Skill) -> Result<MessageResponse, ClientError>;
    async fn delete_project(&self, id: &str) -> Result<MessageResponse, ClientError>;
    async fn delete_skill(&self, id: &str) -> Result<MessageResponse, ClientError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct PortfolioClient {
    http: Client,
    base_url: Url,
    admin_key: Option<Zeroizing<String>>,
}

impl PortfolioClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(PortfolioClient {
            http: Client::new(),
            base_url,
            admin_key: None,
        })
    }

    pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
        self.admin_key = Some(Zeroizing::new(key.into()));
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    fn admin(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let key = self.admin_key.as_ref().ok_or(ClientError::MissingAdminKey)?;
        Ok(request.header(ADMIN_KEY_HEADER, key.as_str()))
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        Err(ClientError::Status { status: status.as_u16(), message })
    }
}

#[async_trait]
impl PortfolioApi for PortfolioClient {
    async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, ClientError> {
        let response = self.http.get(self.endpoint("api/projects")?).send().await?;
        Self::read(response).await
    }

    async fn fetch_skills(&self) -> Result<Vec<SkillRecord>, ClientError> {
        let response = self.http.get(self.endpoint("api/skills")?).send().await?;
        Self::read(response).await
    }

    async fn submit_contact(&self, submission: &ContactSubmission) -> Result<MessageResponse, ClientError> {
        let response = self.http
            .post(self.endpoint("api/contact")?)
            .json(submission)
            .send()
            .await?;
        Self::read(response).await
    }

    async fn create_project(&self, project: &Project) -> Result<MessageResponse, ClientError> {
        let request = self.admin(self.http.post(self.endpoint("api/projects")?))?;
        let response = request.json(project).send().await?;
        Self::read(response).await
    }

    async fn create_skill(&self, skill: &Skill) -> Result<MessageResponse, ClientError> {
        let request = self.admin(self.http.post(self.endpoint("api/skills")?))?;
        let response = request.json(skill).send().await?;
        Self::read(response).await
    }

    async fn delete_project(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let url = self.endpoint(&format!("api/projects/{}", urlencoding::encode(id)))?;
        let response = self.admin(self.http.delete(url))?.send().await?;
        Self::read(response).await
    }

    async fn delete_skill(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let url = self.endpoint(&format!("api/skills/{}", urlencoding::encode(id)))?;
        let response = self.admin(self.http.delete(url))?.send().await?;
        Self::read(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_endpoints_under_base_path() {
        let client = PortfolioClient::new("https://me.dev/backend").unwrap();
        assert_eq!(
            client.endpoint("api/projects").unwrap().as_str(),
            "https://me.dev/backend/api/projects"
        );

        let client = PortfolioClient::new("http://localhost:5000").unwrap();
        assert_eq!(
            client.endpoint("api/skills").unwrap().as_str(),
            "http://localhost:5000/api/skills"
        );
    }

    #[test]
    fn rejects_relative_base_url() {
        assert!(matches!(
            PortfolioClient::new("/api"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn admin_calls_need_a_key() {
        let client = PortfolioClient::new("http://localhost:5000").unwrap();
        let result = client.create_skill(&Skill::default()).await;

        assert!(matches!(result, Err(ClientError::MissingAdminKey)));
    }
}
