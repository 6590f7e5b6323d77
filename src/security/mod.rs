//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → rate_limit.rs (per-identity sliding windows for protected routes)
//!     → credentials.rs (credential collaborator for /login)
//!     → Pass to handler
//! ```
//!
//! # Design Decisions
//! - The limiter is an explicit injected table, not a module singleton
//! - Rejections always carry a retry hint, never a bare denial
//! - Credential verification is a narrow trait; account storage is out of
//!   scope for the gateway

pub mod credentials;
pub mod rate_limit;
