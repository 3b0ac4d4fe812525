use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored user record
///
/// The identifier is serialized as `_id`, which is what the browser client reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct User {
    /// Store-internal insertion counter, used only for listing order
    #[serde(skip)]
    pub sequence_number: Option<i64>,
    /// Identifier assigned by the store at insert time
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Stored and returned as given
    pub password: Option<String>,
}

/// The writable fields of a user
///
/// Insert and update both write all three fields; a `None` is stored as
/// absent rather than leaving the previous value in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

impl User {
    /// True when the writable fields equal `fields`
    pub fn has_fields(&self, fields: &UserFields) -> bool {
        self.name == fields.name && self.email == fields.email && self.password == fields.password
    }
}
