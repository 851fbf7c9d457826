use harbor_core::error::CoreError;
use thiserror::Error;

/// Why a picked file can't be uploaded. Messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid file type. Allowed types: {}", .allowed.join(", "))]
    InvalidType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("File size must be less than {max_size_in_mb}MB")]
    TooLarge { size: usize, max_size_in_mb: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressError {
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("failed to compress image: {0}")]
    Compression(String),
}

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error(transparent)]
    InvalidUser(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to load image: {0}")]
    ImageLoad(String),

    #[error("failed to compress image: {0}")]
    Compression(String),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("failed to delete avatar: {0}")]
    Deletion(String),
}

impl From<CompressError> for AvatarError {
    fn from(e: CompressError) -> Self {
        match e {
            CompressError::ImageLoad(msg) => AvatarError::ImageLoad(msg),
            CompressError::Compression(msg) => AvatarError::Compression(msg),
        }
    }
}
