//! Serialization error type.

use thiserror::Error;

/// Error returned when serializing an [`OrderedObject`](crate::OrderedObject)
/// fails.
///
/// Only serialization has an error path; `set`, `has` and `get` always
/// succeed. The first failing value aborts the whole serialization and no
/// partial output is produced.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A contained value could not be encoded as JSON.
    #[error("value encoding failed: {0}")]
    Value(#[from] serde_json::Error),
    /// Encoded output was not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
