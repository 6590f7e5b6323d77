//! In-memory object store for tests and local development.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::storage::{ObjectStore, ObjectUri, StorageError};

/// Map-backed store; objects are keyed by "bucket/key".
#[derive(Default)]
pub struct MemoryStore {
    objects: DashMap<String, Vec<u8>>,
    /// When set, every fetch fails as Unavailable (for failure-path tests).
    unavailable: std::sync::atomic::AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: &str, key: &str, bytes: Vec<u8>) {
        self.objects.insert(format!("{bucket}/{key}"), bytes);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable
            .store(unavailable, std::sync::atomic::Ordering::SeqCst);
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn fetch(&self, location: &ObjectUri) -> Result<Vec<u8>, StorageError> {
        if self.unavailable.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(StorageError::Unavailable("backend offline".to_string()));
        }
        self.objects
            .get(&format!("{}/{}", location.bucket, location.key))
            .map(|entry| entry.clone())
            .ok_or(StorageError::NotFound)
    }
}
