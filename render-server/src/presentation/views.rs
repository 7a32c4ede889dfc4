use std::fmt::Display;

use crate::application::strategy::RenderStrategy;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use askama::Template;
use chrono::{DateTime, Local, TimeZone, Utc};

/// Static output of a page render together with the instant it was produced.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub generated_at: DateTime<Utc>,
}

pub struct PostView {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub created_at_iso: String,
    pub created_at_display: String,
}

impl PostView {
    pub fn from_post<Tz>(post: Post, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: post.id,
            created_at_iso: post.created_at.to_rfc3339(),
            created_at_display: locale_string(&post.created_at.with_timezone(tz)),
            title: post.title,
            content: post.content,
        }
    }
}

/// Formats like `Date.prototype.toLocaleString` does for en-US,
/// e.g. `1/5/2024, 3:04:05 PM`.
pub fn locale_string<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[derive(Template)]
#[template(path = "posts.html")]
pub struct PostsPageTemplate {
    pub heading: String,
    pub abbreviation: &'static str,
    pub path: &'static str,
    pub port: u16,
    pub posts: Vec<PostView>,
    pub explanation: Vec<String>,
    pub dev_notice: bool,
}

impl PostsPageTemplate {
    pub fn new(strategy: RenderStrategy, posts: Vec<Post>, port: u16) -> Self {
        Self {
            heading: strategy.heading(),
            abbreviation: strategy.abbreviation(),
            path: strategy.path(),
            port,
            posts: posts
                .into_iter()
                .map(|post| PostView::from_post(post, &Local))
                .collect(),
            explanation: strategy.explanation(),
            dev_notice: false,
        }
    }

    pub fn with_dev_notice(mut self, dev_notice: bool) -> Self {
        self.dev_notice = dev_notice;
        self
    }
}

#[derive(Template)]
#[template(path = "csr_shell.html")]
pub struct CsrShellTemplate {
    pub heading: String,
    pub bundle_url: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPageTemplate {
    pub status: u16,
    pub message: &'static str,
}

pub struct PageLink {
    pub path: &'static str,
    pub heading: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub pages: Vec<PageLink>,
}

pub fn render<T: Template>(template: &T) -> Result<String, DomainError> {
    template.render().map_err(DomainError::from)
}
