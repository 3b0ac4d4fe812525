use sqlx::{Pool, Sqlite};

use crate::storage::validate_sqlite_table_schema;
use crate::userdb::{
    errors::UserError,
    types::{User, UserFields},
};

use super::config::DB_TABLE_USERS;

// SQLite implementations
pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS;

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            sequence_number INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            name TEXT,
            email TEXT,
            password TEXT
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

/// Validates that the users table schema matches what we expect
pub(super) async fn validate_user_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let expected_columns = [
        ("sequence_number", "INTEGER"),
        ("id", "TEXT"),
        ("name", "TEXT"),
        ("email", "TEXT"),
        ("password", "TEXT"),
    ];

    validate_sqlite_table_schema(pool, DB_TABLE_USERS, &expected_columns, UserError::Storage)
        .await
}

pub(super) async fn insert_user_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
    fields: &UserFields,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS;

    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO {table_name} (id, name, email, password)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#
    ))
    .bind(id)
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.password)
    .fetch_one(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_all_users_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<User>, UserError> {
    let table_name = DB_TABLE_USERS;

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY sequence_number ASC
        "#
    ))
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_user_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS;

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn update_user_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
    fields: &UserFields,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS;

    // All three columns are written, absent ones become NULL
    sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE {table_name}
        SET name = ?, email = ?, password = ?
        WHERE id = ?
        RETURNING *
        "#
    ))
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(&fields.password)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn delete_user_sqlite(pool: &Pool<Sqlite>, id: &str) -> Result<bool, UserError> {
    let table_name = DB_TABLE_USERS;

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(result.rows_affected() > 0)
}
