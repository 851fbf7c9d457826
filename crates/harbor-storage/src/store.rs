use async_trait::async_trait;

use crate::error::StorageError;

/// Options for a single object write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub content_type: Option<String>,
    /// `Cache-Control` max-age in seconds, e.g. `"3600"`.
    pub cache_control: Option<String>,
    /// Overwrite an existing object instead of failing.
    pub upsert: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            content_type: None,
            cache_control: None,
            upsert: true,
        }
    }
}

/// The object storage collaborator.
///
/// Paths are `/`-separated keys relative to the bucket root.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write `body` at `path`. With `upsert` unset an existing object is an error.
    async fn write(
        &self,
        path: &str,
        body: Vec<u8>,
        options: &WriteOptions,
    ) -> Result<(), StorageError>;

    /// Public URL for `path`. Does not check that the object exists.
    fn public_url(&self, path: &str) -> String;

    /// Remove every path. Paths that don't exist are not an error.
    async fn remove(&self, paths: &[String]) -> Result<(), StorageError>;

    /// Names of the objects directly under the `prefix` folder, relative to it.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// Folder form of a prefix: `"u1"` and `"u1/"` both become `"u1/"`.
pub(crate) fn folder(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}/")
    }
}

/// Join a public base URL and an object path with exactly one `/`.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
