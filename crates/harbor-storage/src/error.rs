use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object already exists: {key}")]
    AlreadyExists { key: String },

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),

    #[error("storage config error: {0}")]
    Config(String),
}
