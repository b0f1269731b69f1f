//! Per-client limiter for form submissions.
//!
//! Sliding window over `HashMap<String, VecDeque<Instant>>` keyed by client
//! address. Entries older than the window are pruned on each check.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("rate limit exceeded (max {limit} requests/{window_secs}s)")]
pub struct RateLimitError {
    pub limit: usize,
    pub window_secs: u64,
}

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            limit,
            window,
        }
    }

    pub fn check_and_record(&self, client: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    fn check_and_record_at(&self, client: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut clients = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        // Drop idle clients so the map stays bounded by active ones.
        clients.retain(|_, hits| {
            prune_window(hits, now, self.window);
            !hits.is_empty()
        });

        let hits = clients.entry(client.to_string()).or_default();
        if hits.len() >= self.limit {
            return Err(RateLimitError {
                limit: self.limit,
                window_secs: self.window.as_secs(),
            });
        }
        hits.push_back(now);
        Ok(())
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) >= window {
            deque.pop_front();
        } else {
            break;
        }
    }
}
