//! user_crud - User record store for the user-crud service
//!
//! This crate owns the persistence side of the service: a data store handle
//! over SQLite or PostgreSQL and the `UserStore` operations built on top of it.
//! The HTTP layer lives in `user_crud_axum`.

mod config;
mod storage;
mod userdb;

#[cfg(test)]
mod test_utils;

pub use config::{STORE_URL_ENV, StoreConfig};

pub use storage::{DataStore, StorageError, connect_data_store};

pub use userdb::{User, UserError, UserFields, UserStore};
