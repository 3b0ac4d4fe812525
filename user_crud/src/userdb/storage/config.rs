/// Users table name
pub(super) const DB_TABLE_USERS: &str = "users";
