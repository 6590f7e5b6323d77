//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (rate-limit thresholds and windows nonzero)
//! - Check addresses parse before any socket is opened
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs once at startup; a bad config prevents the service from starting

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidMetricsAddress(String),
    EmptyRegion,
    EmptyRateLimitRoute,
    DuplicateRateLimitRoute(String),
    ZeroRateLimitThreshold(String),
    ZeroRateLimitWindow(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address is not a socket address: {}", addr)
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "observability.metrics_address is not a socket address: {}", addr)
            }
            ValidationError::EmptyRegion => write!(f, "storage.region must not be empty"),
            ValidationError::EmptyRateLimitRoute => {
                write!(f, "rate_limit route path must not be empty")
            }
            ValidationError::DuplicateRateLimitRoute(route) => {
                write!(f, "duplicate rate_limit entry for route {}", route)
            }
            ValidationError::ZeroRateLimitThreshold(route) => {
                write!(f, "rate_limit.max_requests must be nonzero for route {}", route)
            }
            ValidationError::ZeroRateLimitWindow(route) => {
                write!(f, "rate_limit.window_secs must be nonzero for route {}", route)
            }
        }
    }
}

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.storage.region.is_empty() {
        errors.push(ValidationError::EmptyRegion);
    }

    let mut seen_routes = Vec::new();
    for route in &config.rate_limit.routes {
        if route.route.is_empty() {
            errors.push(ValidationError::EmptyRateLimitRoute);
            continue;
        }
        if seen_routes.contains(&route.route.as_str()) {
            errors.push(ValidationError::DuplicateRateLimitRoute(route.route.clone()));
        }
        seen_routes.push(route.route.as_str());

        if route.max_requests == 0 {
            errors.push(ValidationError::ZeroRateLimitThreshold(route.route.clone()));
        }
        if route.window_secs == 0 {
            errors.push(ValidationError::ZeroRateLimitWindow(route.route.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
