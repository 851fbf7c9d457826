use std::sync::Arc;

use harbor_api::auth::TokenVerifier;
use harbor_api::config::ApiConfig;
use harbor_api::state::AppState;
use harbor_media::AvatarService;
use harbor_storage::{MemoryStore, ObjectStore, S3Store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let store: Arc<dyn ObjectStore> = match &config.avatar_bucket {
        Some(bucket) => {
            let s3 = harbor_storage::client::build_client().await;
            Arc::new(S3Store::new(s3, bucket, &config.public_base_url)?)
        }
        None => {
            tracing::warn!("HARBOR_AVATAR_BUCKET not set, avatars are kept in memory");
            Arc::new(MemoryStore::new(&config.public_base_url))
        }
    };

    let verifier = TokenVerifier::new(&config.jwt_secret, config.jwt_audience.as_deref());
    let state = AppState::new(AvatarService::new(store, config.media.clone()), verifier);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, harbor_api::app(state)).await?;
    Ok(())
}
