use thiserror::Error;

use crate::storage::StorageError;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    /// Driver or connection failure; carries the raw underlying message
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for UserError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Storage(msg) => UserError::Storage(msg),
            other => UserError::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(UserError::NotFound.to_string(), "User not found");
    }

    #[test]
    fn test_from_storage_error_keeps_raw_text() {
        let user_error = UserError::from(StorageError::Storage("disk I/O error".to_string()));

        assert_eq!(user_error, UserError::Storage("disk I/O error".to_string()));
    }

    #[test]
    fn test_from_unsupported_store() {
        let user_error = UserError::from(StorageError::UnsupportedStore("mongodb".to_string()));

        match user_error {
            UserError::Storage(msg) => assert!(msg.contains("mongodb")),
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_error_propagation() {
        fn connect(url: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidUrl(url.to_string()))
        }

        fn open_users(url: &str) -> Result<(), UserError> {
            connect(url)?;
            Ok(())
        }

        assert!(matches!(open_users("bogus"), Err(UserError::Storage(_))));
    }
}
