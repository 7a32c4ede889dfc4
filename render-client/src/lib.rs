//! HTTP client for the rendering demo server: the mock posts endpoint and
//! the three strategy pages.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

mod error;
mod http_client;

pub use error::RenderClientError;
pub use http_client::{FetchedPage, RenderClientHttp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("[{}] {} ({})", id, title, created_at)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One of the server's rendering strategy pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    ServerSide,
    ClientSide,
    Incremental,
}

impl PageRoute {
    pub fn path(&self) -> &'static str {
        match self {
            PageRoute::ServerSide => "/ssr",
            PageRoute::ClientSide => "/csr",
            PageRoute::Incremental => "/isr",
        }
    }
}

impl fmt::Display for PageRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}

impl FromStr for PageRoute {
    type Err = RenderClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/').to_ascii_lowercase().as_str() {
            "ssr" => Ok(PageRoute::ServerSide),
            "csr" => Ok(PageRoute::ClientSide),
            "isr" => Ok(PageRoute::Incremental),
            other => Err(RenderClientError::InvalidRequest(format!(
                "unknown page: {other}"
            ))),
        }
    }
}
