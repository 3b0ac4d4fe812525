use std::fmt;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::storage::{DataStore, connect_data_store};
use crate::userdb::{
    errors::UserError,
    types::{User, UserFields},
};

use super::postgres::*;
use super::sqlite::*;

/// Handle to the persistent user collection
///
/// Cloning is cheap; all clones share the same connection pool.
#[derive(Clone)]
pub struct UserStore {
    store: Arc<dyn DataStore>,
}

impl fmt::Debug for UserStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserStore")
            .field("backend", &self.store.backend())
            .finish()
    }
}

impl UserStore {
    /// Wrap an existing data store. Call [`UserStore::init`] before use.
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Connect to the configured backend and make sure the users table exists
    pub async fn connect(config: &StoreConfig) -> Result<Self, UserError> {
        let store = Self::new(connect_data_store(&config.url)?);
        store.init().await?;
        tracing::info!(backend = store.store.backend(), "User store initialized");
        Ok(store)
    }

    /// Create the users table if missing and validate its schema
    pub async fn init(&self) -> Result<(), UserError> {
        if let Some(pool) = self.store.as_sqlite() {
            create_tables_sqlite(pool).await?;
            validate_user_tables_sqlite(pool).await
        } else if let Some(pool) = self.store.as_postgres() {
            create_tables_postgres(pool).await?;
            validate_user_tables_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Persist a new user under a freshly minted id
    #[tracing::instrument(skip(self, fields))]
    pub async fn insert(&self, fields: UserFields) -> Result<User, UserError> {
        let id = uuid::Uuid::new_v4().to_string();

        let result = if let Some(pool) = self.store.as_sqlite() {
            insert_user_sqlite(pool, &id, &fields).await
        } else if let Some(pool) = self.store.as_postgres() {
            insert_user_postgres(pool, &id, &fields).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(user) => tracing::info!(user_id = %user.id, "User insert completed"),
            Err(e) => tracing::error!(error = %e, "User insert failed"),
        }

        result
    }

    /// Every stored user, in insertion order
    pub async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let result = if let Some(pool) = self.store.as_sqlite() {
            get_all_users_sqlite(pool).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_all_users_postgres(pool).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        if let Err(e) = &result {
            tracing::error!(error = %e, "User listing failed");
        }

        result
    }

    /// Get a user by id
    ///
    /// An id that is not even well-formed is simply not found.
    #[tracing::instrument(skip(self), fields(user_id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<User, UserError> {
        let result = if let Some(pool) = self.store.as_sqlite() {
            get_user_sqlite(pool, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match result {
            Ok(Some(user)) => {
                tracing::info!(found = true, "User lookup completed");
                Ok(user)
            }
            Ok(None) => {
                tracing::info!(found = false, "User lookup completed - not found");
                Err(UserError::NotFound)
            }
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed");
                Err(e)
            }
        }
    }

    /// Overwrite all writable fields of a user and return the result
    #[tracing::instrument(skip(self, fields), fields(user_id = %id))]
    pub async fn update_by_id(&self, id: &str, fields: UserFields) -> Result<User, UserError> {
        let result = if let Some(pool) = self.store.as_sqlite() {
            update_user_sqlite(pool, id, &fields).await
        } else if let Some(pool) = self.store.as_postgres() {
            update_user_postgres(pool, id, &fields).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match result {
            Ok(Some(user)) => {
                tracing::info!("User update completed");
                Ok(user)
            }
            Ok(None) => {
                tracing::info!("User update skipped - not found");
                Err(UserError::NotFound)
            }
            Err(e) => {
                tracing::error!(error = %e, "User update failed");
                Err(e)
            }
        }
    }

    /// Remove a user; a second delete of the same id is `NotFound`
    #[tracing::instrument(skip(self), fields(user_id = %id))]
    pub async fn delete_by_id(&self, id: &str) -> Result<(), UserError> {
        let result = if let Some(pool) = self.store.as_sqlite() {
            delete_user_sqlite(pool, id).await
        } else if let Some(pool) = self.store.as_postgres() {
            delete_user_postgres(pool, id).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match result {
            Ok(true) => {
                tracing::info!("User delete completed");
                Ok(())
            }
            Ok(false) => {
                tracing::info!("User delete skipped - not found");
                Err(UserError::NotFound)
            }
            Err(e) => {
                tracing::error!(error = %e, "User delete failed");
                Err(e)
            }
        }
    }
}
