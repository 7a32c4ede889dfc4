use std::sync::Arc;

use crate::application::post_service::PostService;
use crate::application::regeneration::RegenerationCache;
use crate::application::strategy::RenderStrategy;
use crate::data::post_repository::{MockPostRepository, StampedPostRepository, TimestampPolicy};
use crate::data::remote_repository::HttpPostRepository;
use crate::data::seed::{API_POSTS, ISR_POSTS};
use crate::infrastructure::config::AppConfig;
use crate::presentation::views::RenderedPage;
use chrono::Utc;
use reqwest::Client;

/// Everything the handlers share. Each page owns its own post source.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Backs `GET /api/posts`.
    pub api_posts: PostService,
    /// Reached over HTTP by the server-rendered page.
    pub ssr_posts: PostService,
    pub isr_posts: PostService,
    pub isr_cache: RegenerationCache<RenderedPage>,
}

impl AppState {
    pub fn from_config(config: AppConfig, client: Client) -> Self {
        let policy = if config.run_mode.is_development() {
            TimestampPolicy::Fixed(Utc::now())
        } else {
            TimestampPolicy::WallClock
        };

        let api_posts = PostService::new(Arc::new(MockPostRepository::from_seeds(
            &API_POSTS,
            config.mock_latency,
        )));
        let ssr_posts = PostService::new(Arc::new(HttpPostRepository::new(
            client,
            config.posts_api_url.clone(),
        )));
        let isr_posts = PostService::new(Arc::new(StampedPostRepository::new(
            &ISR_POSTS,
            policy,
            config.mock_latency,
        )));

        Self::new(config, api_posts, ssr_posts, isr_posts)
    }

    pub fn new(
        config: AppConfig,
        api_posts: PostService,
        ssr_posts: PostService,
        isr_posts: PostService,
    ) -> Self {
        let isr_cache = RegenerationCache::new(config.revalidate);
        Self {
            config: Arc::new(config),
            api_posts,
            ssr_posts,
            isr_posts,
            isr_cache,
        }
    }

    pub fn isr_strategy(&self) -> RenderStrategy {
        RenderStrategy::Incremental {
            revalidate: self.isr_cache.interval(),
        }
    }
}
