//! # Store Errors
//!
//! Error types for the persistence gateway. Absence of a row is never an
//! error here; it is an `Option::None` result at the trait boundary.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence gateway errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Snapshot checksum mismatch or malformed layout
    #[error("Snapshot corrupted: {0}")]
    Corrupted(String),

    /// The id counter saturated and the remaining id is occupied
    #[error("Id space exhausted")]
    IdSpaceExhausted,

    /// Internal invariant failure (poisoned lock)
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::Corrupted("checksum mismatch".to_string());
        assert_eq!(err.to_string(), "Snapshot corrupted: checksum mismatch");

        let err = StoreError::Internal("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Internal error: lock poisoned");
    }
}
