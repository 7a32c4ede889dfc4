use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::domain::error::DomainError;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// How a cached value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Served from a snapshot younger than the interval.
    Hit,
    /// Served from an expired snapshot while a regeneration runs.
    Stale,
    /// Nothing cached yet; produced inline.
    Miss,
}

impl Freshness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::Hit => "HIT",
            Freshness::Stale => "STALE",
            Freshness::Miss => "MISS",
        }
    }
}

#[derive(Debug, Clone)]
struct Snapshot<T> {
    value: T,
    generated_at: Instant,
}

/// Stale-while-revalidate cache holding one value.
///
/// A snapshot older than `interval` is still served, but it triggers a single
/// background regeneration; the request after that regeneration completes
/// sees the new value. A failed regeneration leaves the old snapshot in place.
#[derive(Debug)]
pub struct RegenerationCache<T> {
    interval: Duration,
    slot: Arc<RwLock<Option<Snapshot<T>>>>,
    regenerating: Arc<AtomicBool>,
}

impl<T> Clone for RegenerationCache<T> {
    fn clone(&self) -> Self {
        Self {
            interval: self.interval,
            slot: Arc::clone(&self.slot),
            regenerating: Arc::clone(&self.regenerating),
        }
    }
}

impl<T> RegenerationCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            slot: Arc::new(RwLock::new(None)),
            regenerating: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn get_or_regenerate<F, Fut>(&self, produce: F) -> Result<(T, Freshness), DomainError>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, DomainError>> + Send + 'static,
    {
        let cached = self.slot.read().await.clone();
        if let Some(snapshot) = cached {
            if snapshot.generated_at.elapsed() < self.interval {
                return Ok((snapshot.value, Freshness::Hit));
            }
            self.spawn_regeneration(produce);
            return Ok((snapshot.value, Freshness::Stale));
        }

        let mut slot = self.slot.write().await;
        // Another request may have finished the first build while we waited.
        if let Some(snapshot) = slot.as_ref() {
            return Ok((snapshot.value.clone(), Freshness::Hit));
        }

        let value = produce().await?;
        *slot = Some(Snapshot {
            value: value.clone(),
            generated_at: Instant::now(),
        });
        info!("initial snapshot generated");
        Ok((value, Freshness::Miss))
    }

    fn spawn_regeneration<F, Fut>(&self, produce: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, DomainError>> + Send + 'static,
    {
        if self.regenerating.swap(true, Ordering::AcqRel) {
            debug!("regeneration already in flight");
            return;
        }

        let slot = Arc::clone(&self.slot);
        let guard = InFlight(Arc::clone(&self.regenerating));
        tokio::spawn(async move {
            let _guard = guard;
            match produce().await {
                Ok(value) => {
                    *slot.write().await = Some(Snapshot {
                        value,
                        generated_at: Instant::now(),
                    });
                    info!("snapshot regenerated");
                }
                Err(e) => warn!(error = %e, "regeneration failed, keeping previous snapshot"),
            }
        });
    }
}

/// Clears the regeneration flag when the task ends, even if it panicked.
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter_producer(
        counter: Arc<AtomicUsize>,
    ) -> impl FnOnce() -> std::pin::Pin<Box<dyn Future<Output = Result<usize, DomainError>> + Send>>
    + Send
    + 'static {
        move || {
            Box::pin(async move {
                tokio::time::sleep(Duration::from_millis(1000)).await;
                Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
            })
        }
    }

    async fn settle() {
        // Let the background task run through its simulated delay.
        tokio::time::sleep(Duration::from_millis(1500)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn first_request_builds_inline() {
        let cache = RegenerationCache::new(Duration::from_secs(10));
        let counter = Arc::new(AtomicUsize::new(0));

        let (value, freshness) = cache
            .get_or_regenerate(counter_producer(Arc::clone(&counter)))
            .await
            .unwrap();

        assert_eq!(value, 1);
        assert_eq!(freshness, Freshness::Miss);
    }

    #[tokio::test(start_paused = true)]
    async fn requests_within_interval_share_a_snapshot() {
        let cache = RegenerationCache::new(Duration::from_secs(10));
        let counter = Arc::new(AtomicUsize::new(0));

        let (first, _) = cache.get_or_regenerate(counter_producer(Arc::clone(&counter))).await.unwrap();
        tokio::time::advance(Duration::from_secs(9)).await;
        let (second, freshness) = cache.get_or_regenerate(counter_producer(Arc::clone(&counter))).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(freshness, Freshness::Hit);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_snapshot_is_served_once_then_replaced() {
        let cache = RegenerationCache::new(Duration::from_secs(10));
        let counter = Arc::new(AtomicUsize::new(0));

        cache.get_or_regenerate(counter_producer(Arc::clone(&counter))).await.unwrap();
        tokio::time::advance(Duration::from_secs(11)).await;

        let (stale, freshness) = cache.get_or_regenerate(counter_producer(Arc::clone(&counter))).await.unwrap();
        assert_eq!(stale, 1);
        assert_eq!(freshness, Freshness::Stale);

        settle().await;

        let (fresh, freshness) = cache.get_or_regenerate(counter_producer(Arc::clone(&counter))).await.unwrap();
        assert_eq!(fresh, 2);
        assert_eq!(freshness, Freshness::Hit);
    }

    #[tokio::test(start_paused = true)]
    async fn only_one_background_regeneration_runs() {
        let cache = RegenerationCache::new(Duration::from_secs(10));
        let counter = Arc::new(AtomicUsize::new(0));

        cache.get_or_regenerate(counter_producer(Arc::clone(&counter))).await.unwrap();
        tokio::time::advance(Duration::from_secs(11)).await;

        for _ in 0..5 {
            let (_, freshness) = cache.get_or_regenerate(counter_producer(Arc::clone(&counter))).await.unwrap();
            assert_eq!(freshness, Freshness::Stale);
        }
        settle().await;

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_regeneration_keeps_previous_snapshot() {
        let cache = RegenerationCache::new(Duration::from_secs(10));
        cache
            .get_or_regenerate(|| async { Ok::<_, DomainError>(7usize) })
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(11)).await;

        cache
            .get_or_regenerate(|| async { Err(DomainError::fetch_failed()) })
            .await
            .unwrap();
        settle().await;

        let (value, freshness) = cache
            .get_or_regenerate(|| async { Ok(8usize) })
            .await
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(freshness, Freshness::Stale);
    }

    #[tokio::test(start_paused = true)]
    async fn panicking_regeneration_does_not_block_the_next_one() {
        let cache = RegenerationCache::new(Duration::from_secs(10));
        cache
            .get_or_regenerate(|| async { Ok::<_, DomainError>(7usize) })
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(11)).await;

        let (_, freshness) = cache
            .get_or_regenerate(|| async {
                let exploded = true;
                if exploded {
                    panic!("template exploded");
                }
                Ok::<_, DomainError>(0usize)
            })
            .await
            .unwrap();
        assert_eq!(freshness, Freshness::Stale);
        settle().await;

        cache.get_or_regenerate(|| async { Ok(8usize) }).await.unwrap();
        settle().await;

        let (value, freshness) = cache.get_or_regenerate(|| async { Ok(9usize) }).await.unwrap();
        assert_eq!(value, 8);
        assert_eq!(freshness, Freshness::Hit);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_first_build_propagates() {
        let cache: RegenerationCache<usize> = RegenerationCache::new(Duration::from_secs(10));

        let err = cache
            .get_or_regenerate(|| async { Err(DomainError::fetch_failed()) })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::FetchFailed(_)));
    }
}
