//! Menu Errors
//!
//! Every failure here is recovered by the caller and logged; none of them
//! ever reaches the user.

use thiserror::Error;

/// Common result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Debug, Error)]
pub enum MenuError {
    /// The storage backend refused a read or write
    #[error("storage error: {0}")]
    Storage(String),

    /// The persisted record is not a JSON array of strings
    #[error("corrupt expansion record: {0}")]
    CorruptRecord(#[source] serde_json::Error),

    /// The expansion set could not be encoded
    #[error("failed to encode expansion record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(String),
}
