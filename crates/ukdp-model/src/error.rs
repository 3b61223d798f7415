use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid user id '{0}': expected 64 hex characters")]
    InvalidUserId(String),
}
