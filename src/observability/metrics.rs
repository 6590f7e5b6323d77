//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by route and status
//! - `gateway_request_duration_seconds` (histogram): latency by route
//! - `gateway_cache_hits_total` / `gateway_cache_misses_total` (counters):
//!   conditional short-circuits vs storage fetches
//! - `gateway_rate_limited_total` (counter): rejections by route

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    if let Err(err) = builder.install() {
        tracing::error!(error = %err, "Failed to install Prometheus exporter");
    } else {
        tracing::info!(address = %addr, "Metrics exporter listening");
    }
}

/// Record a completed request.
pub fn record_request(route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "gateway_requests_total",
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "gateway_request_duration_seconds",
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a conditional request answered without a storage fetch.
pub fn record_cache_hit() {
    metrics::counter!("gateway_cache_hits_total").increment(1);
}

/// Record a request that required a storage fetch.
pub fn record_cache_miss() {
    metrics::counter!("gateway_cache_misses_total").increment(1);
}

/// Record a rate-limited rejection.
pub fn record_rate_limited(route: &str) {
    metrics::counter!("gateway_rate_limited_total", "route" => route.to_string()).increment(1);
}
