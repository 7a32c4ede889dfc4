use crate::error::FetchError;
use chrono::{DateTime, TimeZone, Utc};
use gloo_timers::future::TimeoutFuture;

/// Simulated network latency before the posts become available.
pub const FETCH_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

const MOCK_POSTS: [(u32, &str, &str); 3] = [
    (
        1,
        "Client-Side Rendering",
        "Client-side rendering builds the page in the browser after the code has loaded.",
    ),
    (
        2,
        "Benefits of CSR",
        "It suits highly interactive applications and takes load off the server.",
    ),
    (
        3,
        "CSR vs SSR",
        "Understanding the difference between client-side and server-side rendering is important.",
    ),
];

pub fn mock_posts(created_at: DateTime<Utc>) -> Vec<Post> {
    MOCK_POSTS
        .iter()
        .map(|(id, title, content)| Post {
            id: *id,
            title: (*title).to_owned(),
            content: (*content).to_owned(),
            created_at,
        })
        .collect()
}

/// Where the page gets its posts from. The embedded list is always there,
/// but `?offline` in the page URL simulates an unreachable backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostSource {
    pub delay_ms: u32,
    pub reachable: bool,
}

impl PostSource {
    pub fn embedded() -> Self {
        Self {
            delay_ms: FETCH_DELAY_MS,
            reachable: true,
        }
    }

    pub fn from_query(search: &str) -> Self {
        let offline = search
            .trim_start_matches('?')
            .split('&')
            .any(|pair| pair.split('=').next() == Some("offline"));
        Self {
            reachable: !offline,
            ..Self::embedded()
        }
    }

    pub async fn fetch(self, created_at: DateTime<Utc>) -> Result<Vec<Post>, FetchError> {
        if self.delay_ms > 0 {
            TimeoutFuture::new(self.delay_ms).await;
        }
        if self.reachable {
            Ok(mock_posts(created_at))
        } else {
            Err(FetchError::Failed("Failed to fetch posts".into()))
        }
    }
}

/// What the page shows for the current value of the posts resource.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Pending,
    Ready(Vec<Post>),
    Failed(String),
}

impl FetchState {
    pub fn from_resource(value: Option<&Result<Vec<Post>, FetchError>>) -> Self {
        match value {
            None => FetchState::Pending,
            Some(Ok(posts)) => FetchState::Ready(posts.clone()),
            Some(Err(e)) => FetchState::Failed(e.to_string()),
        }
    }
}

/// Same layout as `Date.prototype.toLocaleString` for en-US.
pub fn locale_string<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
