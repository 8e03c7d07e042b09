//! Bucket listing fetcher backed by S3.
//!
//! DESIGN
//! ======
//! Each activation builds a fresh SDK client scoped to the configured region
//! and issues a single `ListObjectsV2`. Credentials come from the AWS default
//! provider chain. A missing `Contents` field is an empty listing.

use std::error::Error;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::types::Object;
use storefront_client::net::types::StorageObject;

use crate::config::StorageConfig;
use crate::error::FetchError;

/// Source of the bucket listing, one upstream call per invocation.
#[async_trait]
pub trait ObjectListing: Send + Sync {
    async fn list_objects(&self) -> Result<Vec<StorageObject>, FetchError>;
}

pub struct S3ObjectLister {
    config: StorageConfig,
}

impl S3ObjectLister {
    #[must_use]
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    async fn client(&self) -> aws_sdk_s3::Client {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.config.region.clone()))
            .load()
            .await;
        aws_sdk_s3::Client::new(&shared)
    }
}

#[async_trait]
impl ObjectListing for S3ObjectLister {
    async fn list_objects(&self) -> Result<Vec<StorageObject>, FetchError> {
        let client = self.client().await;
        let output = client
            .list_objects_v2()
            .set_bucket(self.config.bucket_name.clone())
            .send()
            .await
            .map_err(|err| {
                let message = err
                    .as_service_error()
                    .and_then(|e| e.message())
                    .map_or_else(|| error_chain_message(&err), str::to_owned);
                tracing::error!(
                    bucket = ?self.config.bucket_name,
                    region = %self.config.region,
                    error = %DisplayErrorContext(&err),
                    "Error fetching S3 objects"
                );
                FetchError::Storage(message)
            })?;

        let objects = objects_from_contents(output.contents());
        tracing::debug!(count = objects.len(), "listed bucket");
        Ok(objects)
    }
}

/// Project SDK entries onto the wire type. Missing keys and sizes default to
/// `""` and `0`.
#[must_use]
pub fn objects_from_contents(contents: &[Object]) -> Vec<StorageObject> {
    contents
        .iter()
        .map(|object| StorageObject {
            key: object.key().unwrap_or_default().to_owned(),
            size: object.size().unwrap_or_default(),
        })
        .collect()
}

/// Join the `Display` of an error and each of its sources with `": "`.
///
/// Adjacent duplicates are collapsed; SDK wrappers often repeat their
/// source's text.
#[must_use]
pub fn error_chain_message(err: &(dyn Error + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut current = Some(err);
    while let Some(e) = current {
        let text = e.to_string();
        if !text.is_empty() && parts.last() != Some(&text) {
            parts.push(text);
        }
        current = e.source();
    }
    parts.join(": ")
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
