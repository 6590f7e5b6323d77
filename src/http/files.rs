//! File-serving handler.
//!
//! # Responsibilities
//! - Evaluate the conditional cache decision before any storage I/O
//! - Fetch from the object store only on Serve
//! - Attach Cache-Control, ETag, and Content-Type per category
//!
//! # Design Decisions
//! - Storage errors keep their kind: NotFound maps to 404, Unavailable to
//!   502; neither is reinterpreted as a cache decision
//! - ETags are emitted quoted per HTTP; quotes are stripped from the
//!   client token before the exact-match comparison

use std::time::Instant;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::cache::{classify, evaluate, fingerprint, media_type, policy_for, Decision};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::storage::{ObjectUri, StorageError};

#[derive(Debug, Deserialize)]
pub struct FileQuery {
    /// Full object location, e.g. "s3://media/segments/42/last_frame.png".
    pub path: String,
}

/// GET /files?path=s3://bucket/key with optional If-None-Match.
pub async fn serve_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FileQuery>,
) -> Response {
    let start = Instant::now();

    let location = match ObjectUri::parse(&query.path) {
        Ok(location) => location,
        Err(_) => {
            metrics::record_request("/files", 400, start);
            return (
                StatusCode::BAD_REQUEST,
                "Path must be an S3 URI (s3://...)",
            )
                .into_response();
        }
    };

    let client_token = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().trim_matches('"'));

    let (category, token) = match evaluate(&query.path, client_token) {
        Decision::NotModified => {
            tracing::debug!(path = %query.path, "Conditional match, skipping fetch");
            metrics::record_cache_hit();
            metrics::record_request("/files", 304, start);

            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::NOT_MODIFIED;
            let headers = response.headers_mut();
            headers.insert(header::ETAG, etag_value(&fingerprint(&query.path)));
            headers.insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static(policy_for(classify(&query.path)).cache_control),
            );
            return response;
        }
        Decision::Serve { category, token } => (category, token),
    };

    metrics::record_cache_miss();

    let bytes = match state.store.fetch(&location).await {
        Ok(bytes) => bytes,
        Err(StorageError::NotFound) => {
            metrics::record_request("/files", 404, start);
            return (StatusCode::NOT_FOUND, "Object not found").into_response();
        }
        Err(err) => {
            tracing::error!(path = %query.path, error = %err, "Storage fetch failed");
            metrics::record_request("/files", 502, start);
            return (StatusCode::BAD_GATEWAY, "Storage unavailable").into_response();
        }
    };

    let policy = policy_for(category);

    let mut response = Response::new(Body::from(bytes));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(media_type(&query.path)),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(policy.cache_control),
    );
    if policy.cacheable {
        headers.insert(header::ETAG, etag_value(&token));
    }

    metrics::record_request("/files", 200, start);
    response
}

/// Quote a fingerprint token as a strong ETag.
fn etag_value(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("\"{token}\""))
        .expect("fingerprint tokens are valid header values")
}
