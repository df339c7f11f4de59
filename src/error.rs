use thiserror::Error;

/// Errors produced by the list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An argument was outside the domain the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ListError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ListError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
