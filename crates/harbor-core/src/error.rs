use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("user id '{0}' is not a valid storage path segment")]
    InvalidUserId(String),
}
