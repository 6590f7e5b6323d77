//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: CORS, timeout, request ID, rate limit)
//!     → files.rs (conditional cache decision, storage fetch on Serve)
//!     → auth.rs (credential collaborator behind the rate limiter)
//!     → Send to client
//! ```

pub mod auth;
pub mod files;
pub mod server;

pub use server::{AppState, HttpServer};
