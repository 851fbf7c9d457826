use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::store::{ObjectStore, WriteOptions, folder, join_url};

/// An object held by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
    pub cache_control: Option<String>,
}

/// In-process [`ObjectStore`], for tests and local development.
#[derive(Debug)]
pub struct MemoryStore {
    public_base_url: String,
    objects: Mutex<BTreeMap<String, StoredObject>>,
}

impl MemoryStore {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            objects: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn get(&self, path: &str) -> Option<StoredObject> {
        self.lock().get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.lock().contains_key(path)
    }

    /// Every stored path, sorted.
    pub fn paths(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Seed an object directly, bypassing write options.
    pub fn insert(&self, path: impl Into<String>, body: Vec<u8>) {
        self.lock().insert(
            path.into(),
            StoredObject {
                body,
                content_type: None,
                cache_control: None,
            },
        );
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, StoredObject>> {
        // A panic while holding the lock can't leave the map half-updated.
        self.objects.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory://avatars")
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn write(
        &self,
        path: &str,
        body: Vec<u8>,
        options: &WriteOptions,
    ) -> Result<(), StorageError> {
        let mut objects = self.lock();
        if !options.upsert && objects.contains_key(path) {
            return Err(StorageError::AlreadyExists {
                key: path.to_string(),
            });
        }
        objects.insert(
            path.to_string(),
            StoredObject {
                body,
                content_type: options.content_type.clone(),
                cache_control: options.cache_control.clone(),
            },
        );
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        join_url(&self.public_base_url, path)
    }

    async fn remove(&self, paths: &[String]) -> Result<(), StorageError> {
        let mut objects = self.lock();
        for path in paths {
            objects.remove(path);
        }
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let folder = folder(prefix);
        Ok(self
            .lock()
            .keys()
            .filter_map(|key| key.strip_prefix(&folder))
            .filter(|name| !name.is_empty() && !name.contains('/'))
            .map(str::to_string)
            .collect())
    }
}
