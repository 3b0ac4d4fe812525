use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use http::StatusCode;
use serde::{Deserialize, Deserializer, de};
use std::fmt;

use user_crud::{User, UserFields, UserStore};

use crate::error::{IntoResponseError, MessageResponse};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<MessageResponse>)>;

/// Request payload for creating or updating a user
///
/// Every field is optional. Whatever is missing is stored as absent, and on
/// update that clears the previous value. Numbers and booleans are stored as
/// their text form; objects and arrays are refused.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub password: Option<String>,
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarStringVisitor)
}

struct ScalarStringVisitor;

impl<'de> de::Visitor<'de> for ScalarStringVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl From<UserRequest> for UserFields {
    fn from(request: UserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

pub(crate) async fn list_users(State(store): State<UserStore>) -> ApiResult<Vec<User>> {
    let users = store.list_all().await.into_response_error()?;
    tracing::debug!("Listing {} users", users.len());
    Ok(Json(users))
}

pub(crate) async fn create_user(
    State(store): State<UserStore>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<User> {
    let Json(request) = payload.into_response_error()?;

    let user = store.insert(request.into()).await.into_response_error()?;
    tracing::debug!("Registered user {}", user.id);
    Ok(Json(user))
}

/// Single-user lookup; the record comes back wrapped in a one-element array,
/// which is the shape the browser client indexes into.
pub(crate) async fn read_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> ApiResult<Vec<User>> {
    let user = store.get_by_id(&id).await.into_response_error()?;
    Ok(Json(vec![user]))
}

pub(crate) async fn update_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> ApiResult<User> {
    let Json(request) = payload.into_response_error()?;

    tracing::debug!("Updating user {}", id);
    let user = store
        .update_by_id(&id, request.into())
        .await
        .into_response_error()?;
    Ok(Json(user))
}

pub(crate) async fn delete_user(
    State(store): State<UserStore>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    store.delete_by_id(&id).await.into_response_error()?;

    tracing::debug!("Deleted user {}", id);
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
