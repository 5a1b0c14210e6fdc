use thiserror::Error;

/// Errors from message store operations (used by the `MessageStore` trait).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("message store unavailable: {0}")]
    Unavailable(String),

    #[error("corrupt stored row: {0}")]
    Corrupt(String),
}

/// Errors from the upstream completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No credential configured; returned before any network call.
    #[error("upstream credential not configured")]
    Misconfigured,

    #[error("completion failed: {0}")]
    Failed(String),
}

/// Failure exits of a chat turn.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("upstream credential not configured")]
    Misconfigured,

    #[error("completion failed: {0}")]
    CompletionFailed(String),

    #[error("store failed: {0}")]
    StoreFailed(#[from] StoreError),
}

impl From<CompletionError> for ChatError {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::Misconfigured => ChatError::Misconfigured,
            CompletionError::Failed(reason) => ChatError::CompletionFailed(reason),
        }
    }
}
