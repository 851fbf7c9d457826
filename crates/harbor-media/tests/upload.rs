mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use harbor_core::models::image::ImageFile;
use harbor_media::error::{AvatarError, ValidationError};
use harbor_media::{AvatarService, MediaOptions};
use harbor_storage::error::StorageError;
use harbor_storage::{MemoryStore, ObjectStore, WriteOptions};

use common::{jpeg_file, png_file};

fn service(store: Arc<MemoryStore>) -> AvatarService {
    AvatarService::new(store, MediaOptions::default())
}

/// Wraps a [`MemoryStore`] and fails selected operations.
struct FlakyStore {
    inner: MemoryStore,
    failing_removes: AtomicUsize,
    fail_writes: bool,
    fail_list: bool,
}

impl FlakyStore {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            failing_removes: AtomicUsize::new(0),
            fail_writes: false,
            fail_list: false,
        }
    }
}

#[async_trait]
impl ObjectStore for FlakyStore {
    async fn write(
        &self,
        path: &str,
        body: Vec<u8>,
        options: &WriteOptions,
    ) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::PutObject("quota exceeded".to_string()));
        }
        self.inner.write(path, body, options).await
    }

    fn public_url(&self, path: &str) -> String {
        self.inner.public_url(path)
    }

    async fn remove(&self, paths: &[String]) -> Result<(), StorageError> {
        let left = self.failing_removes.load(Ordering::SeqCst);
        if left > 0 {
            self.failing_removes.store(left - 1, Ordering::SeqCst);
            return Err(StorageError::DeleteObject("permission denied".to_string()));
        }
        self.inner.remove(paths).await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        if self.fail_list {
            return Err(StorageError::ListObjects("bucket unavailable".to_string()));
        }
        self.inner.list(prefix).await
    }
}

#[tokio::test]
async fn png_upload_lands_on_the_canonical_path() {
    let store = Arc::new(MemoryStore::new("https://cdn.example.com/avatars"));
    let avatars = service(store.clone());
    let file = png_file("me.png", 1200, 800, 21);

    let mut progress = Vec::new();
    let uploaded = avatars
        .upload_avatar(&file, "u1", |p| progress.push(p))
        .await
        .unwrap();

    assert_eq!(uploaded.path, "u1/avatar.png");
    assert_eq!(uploaded.url, "https://cdn.example.com/avatars/u1/avatar.png");

    let stored = store.get("u1/avatar.png").unwrap();
    assert_eq!(stored.content_type.as_deref(), Some("image/png"));
    assert_eq!(stored.cache_control.as_deref(), Some("3600"));
    assert!(stored.body.len() < file.size());

    assert_eq!(progress.first(), Some(&0));
    assert_eq!(progress.last(), Some(&100));
    assert!(progress.windows(2).all(|w| w[0] <= w[1]), "{progress:?}");
    for checkpoint in [10, 22, 35, 47, 60, 70, 90] {
        assert!(progress.contains(&checkpoint), "missing {checkpoint}: {progress:?}");
    }
}

#[tokio::test]
async fn second_upload_overwrites_instead_of_adding() {
    let store = Arc::new(MemoryStore::default());
    let avatars = service(store.clone());

    avatars
        .upload_avatar(&png_file("a.png", 900, 600, 1), "u1", |_| {})
        .await
        .unwrap();
    let first = store.get("u1/avatar.png").unwrap().body;

    avatars
        .upload_avatar(&png_file("b.png", 900, 600, 2), "u1", |_| {})
        .await
        .unwrap();

    assert_eq!(store.paths(), vec!["u1/avatar.png"]);
    assert_ne!(store.get("u1/avatar.png").unwrap().body, first);
}

#[tokio::test]
async fn small_files_are_stored_byte_for_byte() {
    let store = Arc::new(MemoryStore::default());
    let file = png_file("small.png", 16, 16, 4);

    let uploaded = service(store.clone())
        .upload_avatar(&file, "u2", |_| {})
        .await
        .unwrap();

    assert_eq!(store.get(&uploaded.path).unwrap().body, file.bytes);
}

#[tokio::test]
async fn extension_follows_the_original_file_name() {
    let store = Arc::new(MemoryStore::default());
    let uploaded = service(store)
        .upload_avatar(&jpeg_file("holiday.jpeg", 800, 800, 8), "u3", |_| {})
        .await
        .unwrap();
    assert_eq!(uploaded.path, "u3/avatar.jpeg");
}

#[tokio::test]
async fn crafted_file_names_stay_in_the_user_folder_and_are_deletable() {
    let store = Arc::new(MemoryStore::default());
    let avatars = service(store.clone());
    let uploaded = avatars
        .upload_avatar(&png_file("me.x/evil", 16, 16, 5), "u1", |_| {})
        .await
        .unwrap();
    assert_eq!(uploaded.path, "u1/avatar.png");

    let uploaded = avatars
        .upload_avatar(&png_file("ME.PNG", 16, 16, 6), "u1", |_| {})
        .await
        .unwrap();
    assert_eq!(uploaded.path, "u1/avatar.png");

    avatars.delete_avatar("u1").await.unwrap();
    assert!(store.paths().is_empty());
}

#[tokio::test]
async fn validation_failure_stops_before_any_work() {
    let store = Arc::new(MemoryStore::default());
    let file = ImageFile::new("cv.pdf", "application/pdf", vec![1, 2, 3]);

    let mut progress = Vec::new();
    let err = service(store.clone())
        .upload_avatar(&file, "u1", |p| progress.push(p))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AvatarError::Validation(ValidationError::InvalidType { .. })
    ));
    assert_eq!(
        err.to_string(),
        "Invalid file type. Allowed types: image/jpeg, image/png, image/webp"
    );
    assert_eq!(progress, vec![0]);
    assert!(store.paths().is_empty());
}

#[tokio::test]
async fn corrupt_images_are_not_uploaded() {
    let store = Arc::new(MemoryStore::default());
    let file = ImageFile::new("x.png", "image/png", vec![0x42; 300 * 1024]);

    let err = service(store.clone())
        .upload_avatar(&file, "u1", |_| {})
        .await
        .unwrap_err();

    assert!(matches!(err, AvatarError::ImageLoad(_)));
    assert!(store.paths().is_empty());
}

#[tokio::test]
async fn invalid_user_ids_are_rejected() {
    let store = Arc::new(MemoryStore::default());
    let err = service(store)
        .upload_avatar(&png_file("a.png", 8, 8, 1), "../u1", |_| {})
        .await
        .unwrap_err();
    assert!(matches!(err, AvatarError::InvalidUser(_)));
}

#[tokio::test]
async fn storage_write_failure_surfaces_as_upload_error() {
    let mut flaky = FlakyStore::new(MemoryStore::default());
    flaky.fail_writes = true;
    let avatars = AvatarService::new(Arc::new(flaky), MediaOptions::default());

    let mut progress = Vec::new();
    let err = avatars
        .upload_avatar(&png_file("a.png", 8, 8, 1), "u1", |p| progress.push(p))
        .await
        .unwrap_err();

    assert!(matches!(&err, AvatarError::Upload(msg) if msg.contains("quota exceeded")));
    assert_eq!(progress.last(), Some(&70));
}

#[tokio::test]
async fn delete_removes_every_variant_and_legacy_files() {
    let store = Arc::new(MemoryStore::default());
    for path in [
        "u1/avatar.jpg",
        "u1/avatar.jpeg",
        "u1/avatar.png",
        "u1/avatar.webp",
        "u1/avatar.PNG",
        "u1/old-profile-photo.gif",
        "u2/avatar.png",
    ] {
        store.insert(path, vec![0]);
    }

    service(store.clone()).delete_avatar("u1").await.unwrap();

    assert_eq!(store.paths(), vec!["u2/avatar.png"]);
}

#[tokio::test]
async fn delete_after_upload_leaves_nothing_behind() {
    let store = Arc::new(MemoryStore::default());
    let avatars = service(store.clone());
    avatars
        .upload_avatar(&png_file("a.png", 600, 600, 3), "u1", |_| {})
        .await
        .unwrap();

    avatars.delete_avatar("u1").await.unwrap();

    for ext in ["jpg", "jpeg", "png", "webp"] {
        assert!(!store.contains(&format!("u1/avatar.{ext}")));
    }
}

#[tokio::test]
async fn delete_with_nothing_stored_succeeds() {
    let store = Arc::new(MemoryStore::default());
    service(store).delete_avatar("ghost").await.unwrap();
}

#[tokio::test]
async fn canonical_removal_failures_are_swept_up() {
    let inner = MemoryStore::default();
    inner.insert("u1/avatar.png", vec![0]);
    inner.insert("u1/old.gif", vec![0]);
    let flaky = Arc::new(FlakyStore::new(inner));
    flaky.failing_removes.store(4, Ordering::SeqCst);

    let avatars = AvatarService::new(flaky.clone(), MediaOptions::default());
    avatars.delete_avatar("u1").await.unwrap();

    assert!(flaky.inner.paths().is_empty());
}

#[tokio::test]
async fn listing_failure_is_reported() {
    let inner = MemoryStore::default();
    inner.insert("u1/avatar.png", vec![0]);
    let mut flaky = FlakyStore::new(inner);
    flaky.fail_list = true;

    let avatars = AvatarService::new(Arc::new(flaky), MediaOptions::default());
    let err = avatars.delete_avatar("u1").await.unwrap_err();

    assert!(matches!(&err, AvatarError::Deletion(msg) if msg.contains("bucket unavailable")));
}

#[tokio::test]
async fn sweep_removal_failure_is_reported() {
    let inner = MemoryStore::default();
    inner.insert("u1/legacy.bmp", vec![0]);
    let flaky = FlakyStore::new(inner);
    // Four canonical attempts plus the sweep.
    flaky.failing_removes.store(5, Ordering::SeqCst);

    let avatars = AvatarService::new(Arc::new(flaky), MediaOptions::default());
    let err = avatars.delete_avatar("u1").await.unwrap_err();
    assert!(matches!(&err, AvatarError::Deletion(msg) if msg.contains("permission denied")));
}
