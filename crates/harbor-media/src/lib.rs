//! harbor-media
//!
//! Profile avatar pipeline: validate the picked file, shrink it, and store it
//! at the user's canonical avatar path through an [`harbor_storage::ObjectStore`].

pub mod compress;
pub mod error;
pub mod options;
pub mod upload;
pub mod validate;

pub use compress::compress;
pub use options::MediaOptions;
pub use upload::{AvatarService, UploadedAvatar};
pub use validate::validate;
