use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Unsupported store type: {0}. Supported types are 'sqlite' and 'postgres'")]
    UnsupportedStore(String),

    #[error("Invalid store url: {0}")]
    InvalidUrl(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
