use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

pub const SERVER_ERROR_MESSAGE: &str = "❌ Server error, please try again later";

#[derive(Debug)]
pub enum AppError {
    UnauthorizedAccess,
    StoreError(String),
    MailError(MailError),
    InternalError(String),
    /// A failure answered with a route-specific message instead of the
    /// generic one.
    Reported {
        message: &'static str,
        source: Box<AppError>,
    },
}

impl AppError {
    /// Attaches the text a route reports on failure. Authorization failures
    /// keep their own body.
    pub fn reported(self, message: &'static str) -> Self {
        match self {
            AppError::UnauthorizedAccess => self,
            source => AppError::Reported { message, source: Box::new(source) },
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UnauthorizedAccess => write!(f, "Unauthorized"),
            AppError::StoreError(msg) => write!(f, "Store error: {}", msg),
            AppError::MailError(err) => write!(f, "Mail relay error: {}", err),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg),
            AppError::Reported { message, source } => write!(f, "{}: {}", message, source),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::UnauthorizedAccess => serde_json::json!({"error": "Unauthorized"}),
            AppError::Reported { message, source } => {
                tracing::error!(error = %source, "❌ {}", message);
                serde_json::json!({"error": message})
            }
            _ => {
                tracing::error!(error = %self, "❌ Request failed");
                serde_json::json!({"error": SERVER_ERROR_MESSAGE})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnauthorizedAccess => StatusCode::UNAUTHORIZED,
            AppError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MailError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Reported { source, .. } => source.status_code(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StoreError(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::StoreError(format!("Malformed document: {}", err))
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        AppError::MailError(err)
    }
}

#[derive(Debug, Display)]
pub enum MailError {
    #[display("Mail transport failed: {_0}")]
    Transport(String),

    #[display("Mail service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl std::error::Error for MailError {}

impl From<reqwest::Error> for MailError {
    fn from(err: reqwest::Error) -> Self {
        MailError::Transport(err.to_string())
    }
}
