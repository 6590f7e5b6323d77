//! Conditional cache gateway.
//!
//! # Data Flow
//! ```text
//! Incoming file request (path + optional If-None-Match token):
//!     → category.rs (classify path by extension)
//!     → fingerprint.rs (derive the resource validator)
//!     → conditional.rs (NotModified vs Serve decision)
//!     → policy.rs (cache-control directive per category)
//!     → Handler fetches from storage only on Serve
//! ```
//!
//! # Design Decisions
//! - Objects are write-once: a path's fingerprint never changes, so the
//!   validator is a pure function of the path and no object bytes are read
//! - Classification is total: unknown or missing extensions are opaque
//! - Opaque resources never match conditionally and never carry a validator

pub mod category;
pub mod conditional;
pub mod fingerprint;
pub mod policy;

pub use category::{classify, media_type, Category};
pub use conditional::{evaluate, Decision};
pub use fingerprint::fingerprint;
pub use policy::{policy_for, CachePolicy};
