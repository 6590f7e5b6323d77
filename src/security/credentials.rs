//! Credential verification collaborator.
//!
//! # Responsibilities
//! - Define the narrow interface the login handler depends on
//! - Provide the config-backed single-operator implementation
//!
//! # Design Decisions
//! - Account storage and password hashing live behind the trait; the
//!   gateway only consumes the admit/deny outcome
//! - Issued tokens are opaque; session semantics are not interpreted here

use crate::config::AuthConfig;

/// Verifies credentials and issues an opaque access token.
pub trait Authenticator: Send + Sync {
    /// Returns a token when the credentials are valid.
    fn verify(&self, username: &str, password: &str) -> Option<String>;
}

/// Single operator account loaded from configuration.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<String> {
        // An unconfigured account (empty username) never matches
        if self.username.is_empty() {
            return None;
        }
        if username == self.username && password == self.password {
            Some(uuid::Uuid::new_v4().to_string())
        } else {
            None
        }
    }
}
