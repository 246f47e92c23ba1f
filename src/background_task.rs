use std::time::Duration;

use tokio::time::interval;

use crate::limiter::rate_limiter::SlidingWindowLimiter;

/// Periodically drops rate-limiter keys whose window has fully elapsed, so
/// the address map does not grow without bound between restarts.
pub async fn start_limiter_eviction(limiter: SlidingWindowLimiter, window: Duration) {
    let mut interval = interval(window.max(Duration::from_secs(60)));

    loop {
        interval.tick().await;

        let evicted = limiter.evict_stale();
        if evicted > 0 {
            tracing::debug!(
                "Evicted {} stale rate-limiter entries ({} still tracked)",
                evicted,
                limiter.tracked_keys()
            );
        }
    }
}
