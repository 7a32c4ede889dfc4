use std::time::Duration;

use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostSeed, stamp_all};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
}

/// Fixed in-memory list served after an artificial delay.
#[derive(Debug, Clone)]
pub struct MockPostRepository {
    posts: Vec<Post>,
    latency: Duration,
}

impl MockPostRepository {
    pub fn new(posts: Vec<Post>, latency: Duration) -> Self {
        Self { posts, latency }
    }

    /// Stamps every seed once, at construction time.
    pub fn from_seeds(seeds: &[PostSeed], latency: Duration) -> Self {
        Self::new(stamp_all(seeds, Utc::now()), latency)
    }
}

#[async_trait]
impl PostRepository for MockPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        tokio::time::sleep(self.latency).await;
        debug!(count = self.posts.len(), "mock posts served");
        Ok(self.posts.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampPolicy {
    /// Same instant on every call. Used in development so output is stable.
    Fixed(DateTime<Utc>),
    WallClock,
}

impl TimestampPolicy {
    fn now(&self) -> DateTime<Utc> {
        match self {
            TimestampPolicy::Fixed(at) => *at,
            TimestampPolicy::WallClock => Utc::now(),
        }
    }
}

/// Seeds stamped on every call, so each regeneration carries its own
/// creation time.
#[derive(Debug, Clone)]
pub struct StampedPostRepository {
    seeds: &'static [PostSeed],
    policy: TimestampPolicy,
    latency: Duration,
}

impl StampedPostRepository {
    pub fn new(seeds: &'static [PostSeed], policy: TimestampPolicy, latency: Duration) -> Self {
        Self {
            seeds,
            policy,
            latency,
        }
    }
}

#[async_trait]
impl PostRepository for StampedPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        tokio::time::sleep(self.latency).await;
        let created_at = self.policy.now();
        debug!(%created_at, "stamped posts generated");
        Ok(stamp_all(self.seeds, created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed::{API_POSTS, ISR_POSTS};
    use chrono::TimeZone;

    #[tokio::test(start_paused = true)]
    async fn mock_repository_waits_for_latency() {
        let repo = MockPostRepository::from_seeds(&API_POSTS, Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let posts = repo.list_posts().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(posts.len(), API_POSTS.len());
        assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn mock_repository_returns_same_list_each_call() {
        let repo = MockPostRepository::from_seeds(&API_POSTS, Duration::from_millis(10));
        let first = repo.list_posts().await.unwrap();
        let second = repo.list_posts().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_policy_never_changes_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let repo = StampedPostRepository::new(
            &ISR_POSTS,
            TimestampPolicy::Fixed(at),
            Duration::from_millis(1000),
        );

        let first = repo.list_posts().await.unwrap();
        tokio::time::advance(Duration::from_secs(60)).await;
        let second = repo.list_posts().await.unwrap();

        assert!(first.iter().chain(second.iter()).all(|p| p.created_at == at));
    }

    #[tokio::test(start_paused = true)]
    async fn wall_clock_policy_stamps_all_posts_alike() {
        let repo = StampedPostRepository::new(
            &ISR_POSTS,
            TimestampPolicy::WallClock,
            Duration::ZERO,
        );

        let posts = repo.list_posts().await.unwrap();
        let first = posts[0].created_at;
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|p| p.created_at == first));
    }
}
