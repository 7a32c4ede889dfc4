use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use tracing::{error, info};

/// Reads posts over HTTP from an absolute URL, bypassing every cache.
#[derive(Debug, Clone)]
pub struct HttpPostRepository {
    client: Client,
    url: String,
}

impl HttpPostRepository {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PostRepository for HttpPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let resp = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.url, "posts request failed: {}", e);
                DomainError::fetch_failed()
            })?;

        if !resp.status().is_success() {
            error!(url = %self.url, status = resp.status().as_u16(), "posts endpoint returned an error");
            return Err(DomainError::fetch_failed());
        }

        let posts: Vec<Post> = resp.json().await.map_err(|e| {
            error!(url = %self.url, "posts response could not be decoded: {}", e);
            DomainError::fetch_failed()
        })?;

        info!(url = %self.url, count = posts.len(), "posts fetched over http");
        Ok(posts)
    }
}
