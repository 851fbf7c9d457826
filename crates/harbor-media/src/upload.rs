use std::sync::Arc;

use futures::future::join_all;
use harbor_core::models::image::ImageFile;
use harbor_core::storage_keys;
use harbor_storage::{ObjectStore, WriteOptions};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::compress::compress;
use crate::error::AvatarError;
use crate::options::MediaOptions;
use crate::validate::validate;

/// `Cache-Control` max-age, in seconds, for stored avatars.
pub const CACHE_CONTROL_SECONDS: &str = "3600";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedAvatar {
    pub url: String,
    pub path: String,
}

/// Uploads and deletes profile avatars.
///
/// Each user has one canonical object at `{user_id}/avatar.{ext}`. Writes are
/// upserts and nothing is locked, so concurrent calls for the same user are
/// last-write-wins.
#[derive(Clone)]
pub struct AvatarService {
    store: Arc<dyn ObjectStore>,
    options: MediaOptions,
}

impl AvatarService {
    pub fn new(store: Arc<dyn ObjectStore>, options: MediaOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &MediaOptions {
        &self.options
    }

    /// Validate, compress and store `file` as the user's avatar.
    ///
    /// Progress is reported as a non-decreasing percentage: validation ends at
    /// 10, compression fills 10–60, the path is fixed at 70, the write
    /// finishes at 90 and the public URL at 100.
    pub async fn upload_avatar<F>(
        &self,
        file: &ImageFile,
        user_id: &str,
        mut on_progress: F,
    ) -> Result<UploadedAvatar, AvatarError>
    where
        F: FnMut(u8) + Send,
    {
        on_progress(0);
        storage_keys::check_user_id(user_id)?;
        validate(file, &self.options)?;
        on_progress(10);

        let compressed = self.compress_off_thread(file, &mut on_progress).await?;

        let path = storage_keys::avatar(user_id, &file.extension());
        on_progress(70);

        let write_options = WriteOptions {
            content_type: Some(compressed.content_type.clone()),
            cache_control: Some(CACHE_CONTROL_SECONDS.to_string()),
            upsert: true,
        };
        self.store
            .write(&path, compressed.bytes, &write_options)
            .await
            .map_err(|e| AvatarError::Upload(e.to_string()))?;
        on_progress(90);

        let url = self.store.public_url(&path);
        on_progress(100);

        tracing::info!(user_id, path = %path, "avatar uploaded");
        Ok(UploadedAvatar { url, path })
    }

    /// Run the compressor on the blocking pool, relaying its progress into the
    /// 10–60 band as it arrives.
    async fn compress_off_thread<F>(
        &self,
        file: &ImageFile,
        on_progress: &mut F,
    ) -> Result<ImageFile, AvatarError>
    where
        F: FnMut(u8) + Send,
    {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let input = file.clone();
        let quality = self.options.quality;
        let task = tokio::task::spawn_blocking(move || {
            compress(&input, quality, |p| {
                // Fails only once the upload itself has been dropped.
                let _ = tx.send(p);
            })
        });

        while let Some(p) = rx.recv().await {
            on_progress(10 + p / 2);
        }

        let compressed = task
            .await
            .map_err(|e| AvatarError::Compression(e.to_string()))??;
        Ok(compressed)
    }

    /// Remove every avatar the user may have.
    ///
    /// Each canonical extension is removed in parallel and failures there are
    /// only logged; the folder is then listed and anything left is removed.
    /// Only a failure in that second pass is reported.
    pub async fn delete_avatar(&self, user_id: &str) -> Result<(), AvatarError> {
        storage_keys::check_user_id(user_id)?;

        let canonical = storage_keys::avatar_variants(user_id);
        let attempts = canonical.iter().map(|path| async move {
            (path, self.store.remove(std::slice::from_ref(path)).await)
        });
        for (path, outcome) in join_all(attempts).await {
            if let Err(e) = outcome {
                tracing::warn!(path = %path, error = %e, "canonical avatar removal failed");
            }
        }

        let prefix = storage_keys::user_prefix(user_id);
        let leftovers: Vec<String> = self
            .store
            .list(&prefix)
            .await
            .map_err(|e| AvatarError::Deletion(e.to_string()))?
            .iter()
            .map(|name| storage_keys::user_file(user_id, name))
            .collect();

        if !leftovers.is_empty() {
            self.store
                .remove(&leftovers)
                .await
                .map_err(|e| AvatarError::Deletion(e.to_string()))?;
        }

        tracing::info!(user_id, swept = leftovers.len(), "avatar deleted");
        Ok(())
    }
}
