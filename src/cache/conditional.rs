//! Conditional request evaluation.
//!
//! # Responsibilities
//! - Decide per request whether storage must be contacted at all
//!
//! # Design Decisions
//! - Pure function over two strings; it cannot fail and holds no state
//! - Exact token equality only, no weak validator semantics
//! - Opaque categories never short-circuit, even on a token match

use crate::cache::category::{classify, Category};
use crate::cache::fingerprint::fingerprint;
use crate::cache::policy::policy_for;

/// Outcome of evaluating a file request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The client already holds the current object; skip the fetch.
    NotModified,
    /// Fetch the object and attach cache metadata.
    Serve {
        category: Category,
        /// Current validator for the path. Emitted as ETag only when the
        /// category is cacheable.
        token: String,
    },
}

/// Evaluate a file request against its optional client validator.
pub fn evaluate(path: &str, client_token: Option<&str>) -> Decision {
    let category = classify(path);
    let token = fingerprint(path);

    if policy_for(category).cacheable {
        if let Some(client) = client_token {
            if client == token {
                return Decision::NotModified;
            }
        }
    }

    Decision::Serve { category, token }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_always_serves() {
        match evaluate("segments/42/last_frame.png", None) {
            Decision::Serve { category, token } => {
                assert_eq!(category, Category::Image);
                assert_eq!(token, fingerprint("segments/42/last_frame.png"));
            }
            other => panic!("expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn test_matching_token_is_not_modified() {
        let path = "segments/42/last_frame.png";
        let token = fingerprint(path);
        assert_eq!(evaluate(path, Some(&token)), Decision::NotModified);
        // Idempotent: the same conditional request short-circuits every time
        assert_eq!(evaluate(path, Some(&token)), Decision::NotModified);
    }

    #[test]
    fn test_round_trip() {
        let path = "clips/7/output.mp4";
        let token = match evaluate(path, None) {
            Decision::Serve { token, .. } => token,
            other => panic!("expected Serve, got {other:?}"),
        };
        assert_eq!(evaluate(path, Some(&token)), Decision::NotModified);
    }

    #[test]
    fn test_stale_token_serves_current_validator() {
        let path = "segments/42/last_frame.png";
        match evaluate(path, Some("stale")) {
            Decision::Serve { category, token } => {
                assert_eq!(category, Category::Image);
                assert_eq!(token, fingerprint(path));
            }
            other => panic!("expected Serve, got {other:?}"),
        }
    }

    #[test]
    fn test_opaque_never_matches() {
        let path = "model.safetensors";
        let token = fingerprint(path);
        // Even a correct token must not short-circuit an opaque resource
        match evaluate(path, Some(&token)) {
            Decision::Serve { category, .. } => assert_eq!(category, Category::Opaque),
            other => panic!("expected Serve, got {other:?}"),
        }
    }
}
