//! Configuration for connecting the user store

use std::env;

use crate::storage::StorageError;

/// Environment variable holding the store connection string
pub const STORE_URL_ENV: &str = "USER_DATA_STORE_URL";

/// Connection settings for the user store
///
/// The backend is picked from the URL scheme: `sqlite:` or `postgres:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub url: String,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Read the connection string from `USER_DATA_STORE_URL`
    pub fn from_env() -> Result<Self, StorageError> {
        let url = env::var(STORE_URL_ENV)
            .map_err(|_| StorageError::InvalidUrl(format!("{STORE_URL_ENV} must be set")))?;

        if url.trim().is_empty() {
            return Err(StorageError::InvalidUrl(format!(
                "{STORE_URL_ENV} must not be empty"
            )));
        }

        Ok(Self::new(url))
    }
}
