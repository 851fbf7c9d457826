use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::{Extension, Json};

use harbor_core::models::image::ImageFile;
use harbor_media::UploadedAvatar;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const FILE_NAME_HEADER: &str = "x-file-name";

pub async fn upload_avatar(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadedAvatar>, ApiError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().trim().to_string())
        .unwrap_or_default();
    let name = headers
        .get(FILE_NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("avatar");

    let file = ImageFile::new(name, content_type, body.to_vec());
    let uploaded = state
        .avatars
        .upload_avatar(&file, &user.user_id, |percent| {
            tracing::debug!(percent, "avatar upload progress");
        })
        .await?;

    Ok(Json(uploaded))
}

pub async fn delete_avatar(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<StatusCode, ApiError> {
    state.avatars.delete_avatar(&user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
