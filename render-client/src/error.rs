use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RenderClientError {
    pub async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let message = match resp.text().await {
            Ok(body) if !body.trim().is_empty() => body,
            _ => "no response body".to_owned(),
        };
        RenderClientError::Http { status, message }
    }
}
