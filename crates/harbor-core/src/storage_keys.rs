//! Storage key/path conventions.
//!
//! Pure string functions — no storage SDK dependency. These define the
//! canonical layout of objects in the avatar bucket.

use crate::error::CoreError;

/// Extensions an avatar may have been stored under. Deletion sweeps all of them.
pub const AVATAR_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Canonical avatar path for a user: `{user_id}/avatar.{ext}`.
pub fn avatar(user_id: &str, ext: &str) -> String {
    format!("{user_id}/avatar.{ext}")
}

/// Every canonical avatar path for a user, one per recognized extension.
pub fn avatar_variants(user_id: &str) -> Vec<String> {
    AVATAR_EXTENSIONS
        .iter()
        .map(|ext| avatar(user_id, ext))
        .collect()
}

/// Folder holding everything stored for a user.
pub fn user_prefix(user_id: &str) -> String {
    user_id.to_string()
}

pub fn user_file(user_id: &str, name: &str) -> String {
    format!("{user_id}/{name}")
}

/// Reject user ids that would escape their folder.
pub fn check_user_id(user_id: &str) -> Result<(), CoreError> {
    if user_id.is_empty() {
        return Err(CoreError::EmptyUserId);
    }
    if user_id.contains('/') || user_id == "." || user_id == ".." {
        return Err(CoreError::InvalidUserId(user_id.to_string()));
    }
    Ok(())
}
