//! Unified error handling for the cart crate.
//!
//! Each concern keeps its own error type (`StorageError` for the durable
//! collaborator) and converts into [`CartError`] via `#[from]`. Store
//! operations return `Result<T, CartError>`.

use thiserror::Error;

use crate::storage::StorageError;

/// Cart-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// A cart handle was used after its provider scope ended.
    #[error("cart accessed outside an active provider scope")]
    ScopeExpired,

    /// `initialize` was called more than once on the same store.
    #[error("cart store is already initialized")]
    AlreadyInitialized,

    /// The persisted cart blob exists but failed to decode.
    ///
    /// The in-memory snapshot is left empty when this is returned.
    #[error("failed to decode persisted cart: {0}")]
    Decode(#[from] serde_json::Error),

    /// The durable storage collaborator failed.
    ///
    /// For mutations this is reported after the in-memory snapshot has
    /// already been updated and observers notified; the in-memory state is
    /// not rolled back.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_error_display() {
        assert_eq!(
            CartError::ScopeExpired.to_string(),
            "cart accessed outside an active provider scope"
        );
        assert_eq!(
            CartError::AlreadyInitialized.to_string(),
            "cart store is already initialized"
        );
    }

    #[test]
    fn test_storage_error_converts() {
        let err: CartError = StorageError::Backend("quota exceeded".to_string()).into();
        assert!(matches!(err, CartError::Storage(_)));
        assert_eq!(err.to_string(), "storage error: quota exceeded");
    }

    #[test]
    fn test_decode_error_converts() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CartError = json_err.into();
        assert!(matches!(err, CartError::Decode(_)));
    }
}
