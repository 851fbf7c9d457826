use harbor_media::AvatarService;

use crate::auth::TokenVerifier;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub avatars: AvatarService,
    pub verifier: TokenVerifier,
}

impl AppState {
    pub fn new(avatars: AvatarService, verifier: TokenVerifier) -> Self {
        Self { avatars, verifier }
    }

    /// Request body ceiling for uploads: the validator's limit plus 1 MiB.
    pub fn upload_body_limit(&self) -> usize {
        self.avatars.options().max_size_in_bytes() as usize + 1024 * 1024
    }
}
