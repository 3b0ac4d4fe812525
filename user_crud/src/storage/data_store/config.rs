//! Data store construction from a connection string

use std::{str::FromStr, sync::Arc, time::Duration};

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::types::{DataStore, PostgresDataStore, SqliteDataStore};
use crate::storage::errors::StorageError;

/// Build a data store handle for `url`
///
/// The backend is chosen from the URL scheme. Pools connect lazily, so no
/// I/O happens here; connection problems surface on first use.
pub fn connect_data_store(url: &str) -> Result<Arc<dyn DataStore>, StorageError> {
    let store_type = store_type_of(url)?;

    tracing::info!("Initializing data store with type: {}", store_type);

    let store: Arc<dyn DataStore> = match store_type {
        "sqlite" => {
            let opts = SqliteConnectOptions::from_str(url)
                .map_err(|e| StorageError::InvalidUrl(e.to_string()))?
                .create_if_missing(true);

            let pool = if is_sqlite_memory(url) {
                // Every connection to :memory: is a separate database, so keep exactly one alive.
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None::<Duration>)
                    .max_lifetime(None::<Duration>)
                    .connect_lazy_with(opts)
            } else {
                SqlitePoolOptions::new().connect_lazy_with(opts)
            };

            Arc::new(SqliteDataStore { pool })
        }
        "postgres" | "postgresql" => {
            let pool = PgPoolOptions::new()
                .connect_lazy(url)
                .map_err(|e| StorageError::InvalidUrl(e.to_string()))?;

            Arc::new(PostgresDataStore { pool })
        }
        other => return Err(StorageError::UnsupportedStore(other.to_string())),
    };

    tracing::info!("Data store ready: backend={}", store.backend());

    Ok(store)
}

fn store_type_of(url: &str) -> Result<&str, StorageError> {
    match url.split_once(':') {
        Some((scheme, _)) if !scheme.is_empty() => Ok(scheme),
        _ => Err(StorageError::InvalidUrl(format!(
            "missing scheme in store url '{url}'"
        ))),
    }
}

fn is_sqlite_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
