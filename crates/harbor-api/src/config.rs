use std::net::SocketAddr;

use harbor_media::MediaOptions;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const MEMORY_BASE_URL: &str = "memory://avatars";

/// Service configuration, read from `HARBOR_*` environment variables.
#[derive(Clone, PartialEq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// S3 bucket for avatars. Unset means an in-memory store.
    pub avatar_bucket: Option<String>,
    /// Base URL avatars are publicly served from.
    pub public_base_url: String,
    pub media: MediaOptions,
    /// Shared secret the auth provider signs access tokens with.
    pub jwt_secret: String,
    /// Expected `aud` claim. Unset skips the audience check.
    pub jwt_audience: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("avatar_bucket", &self.avatar_bucket)
            .field("public_base_url", &self.public_base_url)
            .field("media", &self.media)
            .field("jwt_secret", &"<redacted>")
            .field("jwt_audience", &self.jwt_audience)
            .finish()
    }
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("HARBOR_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid HARBOR_BIND_ADDR: {e}"))?;

        let avatar_bucket = var("HARBOR_AVATAR_BUCKET");
        let public_base_url = match (var("HARBOR_PUBLIC_BASE_URL"), &avatar_bucket) {
            (Some(url), _) => url,
            (None, Some(bucket)) => format!("https://{bucket}.s3.amazonaws.com"),
            (None, None) => MEMORY_BASE_URL.to_string(),
        };

        let jwt_secret = var("HARBOR_JWT_SECRET")
            .ok_or_else(|| eyre::eyre!("HARBOR_JWT_SECRET must be set"))?;
        let jwt_audience = var("HARBOR_JWT_AUDIENCE");

        let mut media = MediaOptions::default();
        if let Some(raw) = var("HARBOR_MAX_UPLOAD_MB") {
            media.max_size_in_mb = raw
                .parse()
                .map_err(|e| eyre::eyre!("invalid HARBOR_MAX_UPLOAD_MB '{raw}': {e}"))?;
            if !media.max_size_in_mb.is_finite() || media.max_size_in_mb <= 0.0 {
                return Err(eyre::eyre!("HARBOR_MAX_UPLOAD_MB must be positive, got {raw}"));
            }
        }
        if let Some(raw) = var("HARBOR_ALLOWED_TYPES") {
            media.allowed_types = raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            if media.allowed_types.is_empty() {
                return Err(eyre::eyre!("HARBOR_ALLOWED_TYPES lists no types"));
            }
        }
        if let Some(raw) = var("HARBOR_IMAGE_QUALITY") {
            media.quality = raw
                .parse()
                .map_err(|e| eyre::eyre!("invalid HARBOR_IMAGE_QUALITY '{raw}': {e}"))?;
            if !(0.0..=1.0).contains(&media.quality) {
                return Err(eyre::eyre!("HARBOR_IMAGE_QUALITY must be within 0–1, got {raw}"));
            }
        }

        Ok(Self {
            bind_addr,
            avatar_bucket,
            public_base_url,
            media,
            jwt_secret,
            jwt_audience,
        })
    }
}
