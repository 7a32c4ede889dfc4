use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    FetchFailed(String),
    #[error("render error: {0}")]
    Render(String),
}

impl DomainError {
    pub fn fetch_failed() -> Self {
        DomainError::FetchFailed("Failed to fetch posts".into())
    }
}

impl From<askama::Error> for DomainError {
    fn from(err: askama::Error) -> Self {
        DomainError::Render(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
            DomainError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let details = match self {
            DomainError::FetchFailed(_) => Some(json!({ "resource": "posts" })),
            _ => None,
        };
        let body = ErrorBody {
            error: message.as_str(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
