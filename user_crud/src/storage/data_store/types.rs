use sqlx::{PgPool, SqlitePool};

/// SQLite-backed user storage
#[derive(Clone, Debug)]
pub(crate) struct SqliteDataStore {
    pub(super) pool: SqlitePool,
}

/// PostgreSQL-backed user storage
#[derive(Clone, Debug)]
pub(crate) struct PostgresDataStore {
    pub(super) pool: PgPool,
}

/// A connected database backend
///
/// Exactly one of the pool accessors returns `Some`; callers branch on it to
/// pick the matching SQL dialect.
pub trait DataStore: Send + Sync {
    /// Short backend name for logs
    fn backend(&self) -> &'static str;
    fn as_sqlite(&self) -> Option<&SqlitePool>;
    fn as_postgres(&self) -> Option<&PgPool>;
}

impl DataStore for SqliteDataStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn as_sqlite(&self) -> Option<&SqlitePool> {
        Some(&self.pool)
    }

    fn as_postgres(&self) -> Option<&PgPool> {
        None
    }
}

impl DataStore for PostgresDataStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    fn as_sqlite(&self) -> Option<&SqlitePool> {
        None
    }

    fn as_postgres(&self) -> Option<&PgPool> {
        Some(&self.pool)
    }
}
