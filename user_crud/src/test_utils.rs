//! Shared helpers for the crate's unit tests

use crate::config::StoreConfig;
use crate::userdb::{UserFields, UserStore};

/// A fresh, initialized store backed by a private in-memory SQLite database
pub(crate) async fn memory_store() -> UserStore {
    UserStore::connect(&StoreConfig::new("sqlite::memory:"))
        .await
        .expect("Failed to initialize in-memory UserStore")
}

pub(crate) fn alice() -> UserFields {
    UserFields::new("Alice", "a@x.com", "secret1")
}
