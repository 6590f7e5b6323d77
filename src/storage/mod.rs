//! Object storage subsystem.
//!
//! # Data Flow
//! ```text
//! Handler (after a Serve decision):
//!     → ObjectUri::parse (s3://bucket/key)
//!     → ObjectStore::fetch (S3 in production, in-memory in tests)
//!     → bytes | NotFound | Unavailable back to the handler
//! ```
//!
//! # Design Decisions
//! - The store is a narrow trait: the gateway decides *whether* to fetch,
//!   the store decides *how*
//! - Errors keep their kind; the HTTP layer maps NotFound to 404 and
//!   Unavailable to 502 without reinterpretation
//! - No internal retries; retry policy belongs to the SDK client

pub mod memory;
pub mod s3;

use async_trait::async_trait;

pub use memory::MemoryStore;
pub use s3::S3Store;

/// Failure modes of an object fetch.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The path is not a well-formed s3:// URI.
    #[error("invalid object URI: {0}")]
    InvalidUri(String),

    /// No object exists at the requested location.
    #[error("object not found")]
    NotFound,

    /// The backend could not be reached or answered with a failure.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Parsed s3://bucket/key location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUri {
    pub bucket: String,
    pub key: String,
}

impl ObjectUri {
    /// Parse an `s3://bucket/key` URI.
    pub fn parse(uri: &str) -> Result<Self, StorageError> {
        let rest = uri
            .strip_prefix("s3://")
            .ok_or_else(|| StorageError::InvalidUri(uri.to_string()))?;

        let (bucket, key) = rest
            .split_once('/')
            .ok_or_else(|| StorageError::InvalidUri(uri.to_string()))?;

        if bucket.is_empty() || key.is_empty() {
            return Err(StorageError::InvalidUri(uri.to_string()));
        }

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

/// Fetch collaborator for immutable objects.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn fetch(&self, location: &ObjectUri) -> Result<Vec<u8>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bucket_and_key() {
        let uri = ObjectUri::parse("s3://media/segments/42/last_frame.png").unwrap();
        assert_eq!(uri.bucket, "media");
        assert_eq!(uri.key, "segments/42/last_frame.png");
    }

    #[test]
    fn test_parse_rejects_malformed_uris() {
        assert!(matches!(
            ObjectUri::parse("/segments/42/last_frame.png"),
            Err(StorageError::InvalidUri(_))
        ));
        assert!(matches!(
            ObjectUri::parse("s3://bucket-only"),
            Err(StorageError::InvalidUri(_))
        ));
        assert!(matches!(
            ObjectUri::parse("s3:///no-bucket"),
            Err(StorageError::InvalidUri(_))
        ));
        assert!(matches!(
            ObjectUri::parse("s3://bucket/"),
            Err(StorageError::InvalidUri(_))
        ));
    }
}
