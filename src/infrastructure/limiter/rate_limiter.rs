use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use parking_lot::Mutex;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after: Duration },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed)
    }
}

/// Injected capability: at most N actions per rolling window per key.
pub trait RateLimiter: Send + Sync {
    fn check(&self, key: &str) -> RateDecision;
}

/// Sliding window over per-key hit timestamps.
///
/// State is in-process and resets on restart; instances do not share it.
/// Each key's timestamp list sits behind its own mutex, so two simultaneous
/// checks on one key serialize and the count never drops a hit.
#[derive(Clone)]
pub struct SlidingWindowLimiter {
    hits: Arc<DashMap<String, Mutex<Vec<Instant>>>>,
    max_hits: usize,
    window: Duration,
}

impl SlidingWindowLimiter {
    pub fn new(max_hits: u32, window: Duration) -> Self {
        SlidingWindowLimiter {
            hits: Arc::new(DashMap::new()),
            max_hits: max_hits.max(1) as usize,
            window,
        }
    }

    /// Drop keys whose newest hit has aged out of the window. Called from a
    /// background loop so an abusive scan does not grow the map forever.
    pub fn evict_stale(&self) -> usize {
        let now = Instant::now();
        let window = self.window;
        let before = self.hits.len();

        self.hits.retain(|_, timestamps| {
            let timestamps = timestamps.lock();
            timestamps
                .last()
                .is_some_and(|last| now.duration_since(*last) < window)
        });

        before - self.hits.len()
    }

    pub fn tracked_keys(&self) -> usize {
        self.hits.len()
    }
}

impl RateLimiter for SlidingWindowLimiter {
    fn check(&self, key: &str) -> RateDecision {
        let now = Instant::now();
        let entry = self
            .hits
            .entry(key.to_string())
            .or_insert_with(|| Mutex::new(Vec::with_capacity(self.max_hits)));
        let mut timestamps = entry.lock();

        timestamps.retain(|t| now.duration_since(*t) < self.window);

        if timestamps.len() < self.max_hits {
            timestamps.push(now);
            RateDecision::Allowed
        } else {
            // Oldest hit in the window decides how long until a slot frees up
            let retry_after = timestamps
                .first()
                .map(|oldest| self.window.saturating_sub(now.duration_since(*oldest)))
                .unwrap_or(self.window);
            RateDecision::Limited { retry_after }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn fourth_hit_in_window_is_limited() {
        let limiter = SlidingWindowLimiter::new(3, Duration::from_secs(60));

        assert!(limiter.check("10.0.0.1").is_allowed());
        assert!(limiter.check("10.0.0.1").is_allowed());
        assert!(limiter.check("10.0.0.1").is_allowed());

        match limiter.check("10.0.0.1") {
            RateDecision::Limited { retry_after } => {
                assert!(retry_after <= Duration::from_secs(60));
            }
            RateDecision::Allowed => panic!("fourth hit should be limited"),
        }
    }

    #[test]
    fn keys_are_independent() {
        let limiter = SlidingWindowLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.check("a").is_allowed());
        assert!(limiter.check("b").is_allowed());
        assert!(!limiter.check("a").is_allowed());
    }

    #[test]
    fn window_slides() {
        let limiter = SlidingWindowLimiter::new(1, Duration::from_millis(50));
        assert!(limiter.check("a").is_allowed());
        assert!(!limiter.check("a").is_allowed());
        thread::sleep(Duration::from_millis(60));
        assert!(limiter.check("a").is_allowed());
    }

    #[test]
    fn concurrent_hits_never_under_count() {
        let limiter = SlidingWindowLimiter::new(3, Duration::from_secs(60));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let limiter = limiter.clone();
                thread::spawn(move || limiter.check("shared").is_allowed())
            })
            .collect();

        let allowed = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(allowed, 3);
    }

    #[test]
    fn eviction_drops_expired_keys_only() {
        let limiter = SlidingWindowLimiter::new(3, Duration::from_millis(50));
        limiter.check("old");
        thread::sleep(Duration::from_millis(60));
        limiter.check("fresh");

        let evicted = limiter.evict_stale();
        assert_eq!(evicted, 1);
        assert_eq!(limiter.tracked_keys(), 1);
    }
}
