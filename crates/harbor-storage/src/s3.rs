use async_trait::async_trait;
use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::objects;
use crate::store::{ObjectStore, WriteOptions, folder, join_url};

/// [`ObjectStore`] backed by a single S3 bucket.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3Store {
    /// `public_base_url` is where the bucket is served from, e.g. a CDN origin.
    pub fn new(
        client: Client,
        bucket: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let bucket = bucket.into();
        if bucket.is_empty() {
            return Err(StorageError::Config("bucket name is empty".to_string()));
        }
        let public_base_url = public_base_url.into();
        if public_base_url.is_empty() {
            return Err(StorageError::Config("public base URL is empty".to_string()));
        }
        Ok(Self {
            client,
            bucket,
            public_base_url,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn write(
        &self,
        path: &str,
        body: Vec<u8>,
        options: &WriteOptions,
    ) -> Result<(), StorageError> {
        objects::put_object(&self.client, &self.bucket, path, body, options).await
    }

    fn public_url(&self, path: &str) -> String {
        join_url(&self.public_base_url, path)
    }

    async fn remove(&self, paths: &[String]) -> Result<(), StorageError> {
        objects::delete_objects(&self.client, &self.bucket, paths).await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let folder = folder(prefix);
        let keys = objects::list_objects(&self.client, &self.bucket, &folder).await?;
        Ok(keys
            .into_iter()
            .filter_map(|key| key.strip_prefix(&folder).map(str::to_string))
            .filter(|name| !name.is_empty())
            .collect())
    }
}
