use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::RenderClientError;
use crate::{PageRoute, Post};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, HeaderMap};
use tracing::debug;

const CACHE_STATE_HEADER: &str = "x-render-cache";
const GENERATED_AT_HEADER: &str = "x-generated-at";

#[derive(Clone)]
pub struct RenderClientHttp {
    client: Arc<Client>,
    base_url: String,
}

/// A page as seen by a browser, plus what the server reported about how it
/// was produced.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub route: PageRoute,
    pub status: u16,
    pub cache_control: Option<String>,
    pub cache_state: Option<String>,
    pub generated_at: Option<String>,
    pub elapsed: Duration,
    pub body: String,
}

impl FetchedPage {
    pub fn article_count(&self) -> usize {
        self.body.matches("<article").count()
    }

    pub fn is_loading_shell(&self) -> bool {
        self.body.contains("Loading...") && self.article_count() == 0
    }
}

impl RenderClientHttp {
    pub fn connect(endpoint: &str) -> Result<Self, RenderClientError> {
        let base_url = normalize_base_url(endpoint)?;
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_posts(&self) -> Result<(Vec<Post>, Duration), RenderClientError> {
        let started = Instant::now();
        let resp = self
            .client
            .get(format!("{}/api/posts", self.base_url))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(RenderClientError::from_http_response(resp).await);
        }

        let body = resp.bytes().await?;
        let posts = parse_posts(&body)?;
        let elapsed = started.elapsed();
        debug!(count = posts.len(), elapsed_ms = elapsed.as_millis(), "posts listed");
        Ok((posts, elapsed))
    }

    pub async fn fetch_page(&self, route: PageRoute) -> Result<FetchedPage, RenderClientError> {
        let started = Instant::now();
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, route.path()))
            .send()
            .await?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.text().await?;
        let elapsed = started.elapsed();
        debug!(%route, status, elapsed_ms = elapsed.as_millis(), "page fetched");

        Ok(FetchedPage {
            route,
            status,
            cache_control: header_string(&headers, CACHE_CONTROL.as_str()),
            cache_state: header_string(&headers, CACHE_STATE_HEADER),
            generated_at: header_string(&headers, GENERATED_AT_HEADER),
            elapsed,
            body,
        })
    }
}

fn normalize_base_url(endpoint: &str) -> Result<String, RenderClientError> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(RenderClientError::InvalidRequest(format!(
            "server url must start with http:// or https://: {endpoint}"
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_posts(body: &[u8]) -> Result<Vec<Post>, RenderClientError> {
    Ok(serde_json::from_slice(body)?)
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
