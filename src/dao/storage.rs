use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by session stores regardless of the backing medium.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium rejected a read or write.
    #[error("storage unavailable for slot `{slot}`: {message}")]
    Unavailable {
        /// Slot the operation targeted.
        slot: String,
        /// Human readable description of the failure.
        message: String,
        #[source]
        /// Underlying backend failure.
        source: Box<dyn Error + Send + Sync>,
    },
    /// A value could not be serialized before being written.
    #[error("failed to encode slot `{slot}`")]
    Encode {
        /// Slot the operation targeted.
        slot: String,
        #[source]
        /// Serializer failure.
        source: serde_json::Error,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(
        slot: impl Into<String>,
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::Unavailable {
            slot: slot.into(),
            message: message.into(),
            source: Box::new(source),
        }
    }
}
