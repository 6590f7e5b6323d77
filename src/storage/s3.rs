//! AWS S3 object store.

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::Client;

use crate::config::StorageConfig;
use crate::storage::{ObjectStore, ObjectUri, StorageError};

/// Production store backed by the AWS SDK.
pub struct S3Store {
    client: Client,
}

impl S3Store {
    /// Build a client from the ambient AWS environment and configured region.
    pub async fn connect(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn fetch(&self, location: &ObjectUri) -> Result<Vec<u8>, StorageError> {
        let result = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                if let SdkError::ServiceError(ref ctx) = err {
                    if ctx.err().is_no_such_key() {
                        return Err(StorageError::NotFound);
                    }
                }
                return Err(StorageError::Unavailable(err.to_string()));
            }
        };

        let body = output
            .body
            .collect()
            .await
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;

        Ok(body.into_bytes().to_vec())
    }
}
