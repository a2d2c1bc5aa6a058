use thiserror::Error;

// Rejections raised before anything reaches the store or the remote API
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("title is empty")]
    EmptyTitle,
    #[error("invalid task id: {0:?}")]
    BadTaskId(String),
}
