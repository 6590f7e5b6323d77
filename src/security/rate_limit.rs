//! Sliding-window rate limiting with per-route policies.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use dashmap::DashMap;

use crate::config::RouteLimitConfig;
use crate::observability::metrics;

/// Sweep the table for idle entries every this many checks.
const EVICT_INTERVAL: u64 = 4096;

/// Error raised for nonsensical limiter parameters.
///
/// Surfaces at construction time; requests never see it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid rate policy: max_requests and window must both be nonzero")]
pub struct InvalidPolicy;

/// Admission policy for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatePolicy {
    max_requests: u32,
    window: Duration,
}

impl RatePolicy {
    pub fn new(max_requests: u32, window: Duration) -> Result<Self, InvalidPolicy> {
        if max_requests == 0 || window.is_zero() {
            return Err(InvalidPolicy);
        }
        Ok(Self {
            max_requests,
            window,
        })
    }
}

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateDecision {
    /// The request may proceed; it has been recorded.
    Admit,
    /// Over the limit. Not recorded.
    Reject {
        /// Time until the oldest counted request ages out of the window.
        retry_after: Duration,
    },
}

/// Recent admitted requests for one (identity, route) pair.
///
/// Invariant: after pruning, every timestamp is younger than the window.
#[derive(Debug, Default)]
struct SlidingWindow {
    hits: VecDeque<Instant>,
}

impl SlidingWindow {
    /// Drop timestamps that have aged out of the window ending at `now`.
    fn prune(&mut self, window: Duration, now: Instant) {
        while let Some(&oldest) = self.hits.front() {
            if oldest + window <= now {
                self.hits.pop_front();
            } else {
                break;
            }
        }
    }

    fn check_and_record(&mut self, policy: RatePolicy, now: Instant) -> RateDecision {
        self.prune(policy.window, now);

        if self.hits.len() >= policy.max_requests as usize {
            // front is present: max_requests >= 1 and the deque is full
            let oldest = *self.hits.front().expect("full window has an oldest entry");
            return RateDecision::Reject {
                retry_after: (oldest + policy.window) - now,
            };
        }

        self.hits.push_back(now);
        RateDecision::Admit
    }
}

/// Shared limiter state: per-route policies and per-identity windows.
pub struct RateLimiter {
    policies: HashMap<String, RatePolicy>,
    windows: DashMap<(String, String), SlidingWindow>,
    checks: AtomicU64,
}

impl RateLimiter {
    pub fn new(policies: HashMap<String, RatePolicy>) -> Self {
        Self {
            policies,
            windows: DashMap::new(),
            checks: AtomicU64::new(0),
        }
    }

    /// Build the limiter from validated route entries.
    pub fn from_config(routes: &[RouteLimitConfig]) -> Result<Self, InvalidPolicy> {
        let mut policies = HashMap::new();
        for route in routes {
            policies.insert(
                route.route.clone(),
                RatePolicy::new(route.max_requests, Duration::from_secs(route.window_secs))?,
            );
        }
        Ok(Self::new(policies))
    }

    /// Check and atomically record a request for `(identity, route)`.
    ///
    /// Routes without a configured policy are always admitted and never
    /// tracked. The shard guard is held across prune-check-record, so two
    /// concurrent requests cannot both take the last slot.
    pub fn check_and_record(&self, identity: &str, route: &str, now: Instant) -> RateDecision {
        let Some(&policy) = self.policies.get(route) else {
            return RateDecision::Admit;
        };

        self.maybe_evict(now);

        let mut entry = self
            .windows
            .entry((route.to_string(), identity.to_string()))
            .or_default();
        entry.check_and_record(policy, now)
    }

    /// Opportunistic sweep: drop identities idle beyond their route's window.
    fn maybe_evict(&self, now: Instant) {
        if self.checks.fetch_add(1, Ordering::Relaxed) % EVICT_INTERVAL != EVICT_INTERVAL - 1 {
            return;
        }
        self.windows.retain(|(route, _), window| {
            let Some(policy) = self.policies.get(route) else {
                return false;
            };
            window
                .hits
                .back()
                .is_some_and(|&newest| newest + policy.window > now)
        });
    }

    /// Number of tracked (identity, route) pairs.
    pub fn tracked(&self) -> usize {
        self.windows.len()
    }
}

/// Middleware enforcing the limiter for configured routes.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(limiter): State<Arc<RateLimiter>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let identity = addr.ip().to_string();
    let route = request.uri().path().to_string();

    match limiter.check_and_record(&identity, &route, Instant::now()) {
        RateDecision::Admit => next.run(request).await,
        RateDecision::Reject { retry_after } => {
            tracing::warn!(client = %identity, route = %route, "Rate limit exceeded");
            metrics::record_rate_limited(&route);

            let mut response = Response::new(Body::from("Rate limit exceeded"));
            *response.status_mut() = StatusCode::TOO_MANY_REQUESTS;
            response.headers_mut().insert(
                header::RETRY_AFTER,
                ceil_secs(retry_after).into(),
            );
            response
        }
    }
}

/// Round a duration up to whole seconds so the hint never underestimates.
fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
