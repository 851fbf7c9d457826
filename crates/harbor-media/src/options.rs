use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SIZE_IN_MB: f64 = 5.0;
pub const DEFAULT_QUALITY: f64 = 0.8;
pub const DEFAULT_ALLOWED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Tunables for the avatar pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaOptions {
    #[serde(alias = "maxSizeInMB")]
    pub max_size_in_mb: f64,
    /// Accepted MIME types, e.g. `image/png`.
    pub allowed_types: Vec<String>,
    /// Lossy encoder quality, 0–1.
    pub quality: f64,
}

impl MediaOptions {
    pub fn max_size_in_bytes(&self) -> f64 {
        self.max_size_in_mb * 1024.0 * 1024.0
    }
}

impl Default for MediaOptions {
    fn default() -> Self {
        Self {
            max_size_in_mb: DEFAULT_MAX_SIZE_IN_MB,
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|t| t.to_string()).collect(),
            quality: DEFAULT_QUALITY,
        }
    }
}
