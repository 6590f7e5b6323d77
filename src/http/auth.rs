//! Login handler.
//!
//! The rate limiter has already run by the time this handler executes;
//! only admitted attempts reach the credential collaborator.

use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// POST /login with a JSON credential body.
pub async fn login(State(state): State<AppState>, Json(body): Json<LoginRequest>) -> Response {
    let start = Instant::now();

    match state.authenticator.verify(&body.username, &body.password) {
        Some(access_token) => {
            metrics::record_request("/login", 200, start);
            Json(TokenResponse { access_token }).into_response()
        }
        None => {
            tracing::warn!(username = %body.username, "Login rejected");
            metrics::record_request("/login", 401, start);
            (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
        }
    }
}
