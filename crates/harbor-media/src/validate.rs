use harbor_core::models::image::ImageFile;

use crate::error::ValidationError;
use crate::options::MediaOptions;

/// Cheap checks run before any decoding: MIME type first, then size.
pub fn validate(file: &ImageFile, options: &MediaOptions) -> Result<(), ValidationError> {
    if !options.allowed_types.iter().any(|t| *t == file.content_type) {
        return Err(ValidationError::InvalidType {
            content_type: file.content_type.clone(),
            allowed: options.allowed_types.clone(),
        });
    }

    if file.size() as f64 > options.max_size_in_bytes() {
        return Err(ValidationError::TooLarge {
            size: file.size(),
            max_size_in_mb: options.max_size_in_mb,
        });
    }

    Ok(())
}
