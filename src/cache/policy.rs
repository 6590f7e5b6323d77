//! Cache-control policy table.
//!
//! # Responsibilities
//! - Map each category to its cache-control directive and cacheable flag
//!
//! # Design Decisions
//! - The mapping is an exhaustive match: adding a category is a data
//!   change the compiler enforces, not a new control-flow branch
//! - Cacheable categories are long-lived and immutable; opaque forbids
//!   any caching

use crate::cache::category::Category;

/// Directive for objects that never change at a given path.
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Directive for objects with no caching benefit.
const CACHE_FORBIDDEN: &str = "no-store";

/// Header pair attached to a served object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Value of the Cache-Control header.
    pub cache_control: &'static str,
    /// Whether a validator should be emitted and matched.
    pub cacheable: bool,
}

/// Look up the policy for a category.
pub fn policy_for(category: Category) -> CachePolicy {
    match category {
        Category::Image | Category::Video => CachePolicy {
            cache_control: CACHE_IMMUTABLE,
            cacheable: true,
        },
        Category::Opaque => CachePolicy {
            cache_control: CACHE_FORBIDDEN,
            cacheable: false,
        },
    }
}
