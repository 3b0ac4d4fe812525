use axum::{Json, extract::rejection::JsonRejection};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use user_crud::UserError;

/// The `{"Message": ...}` body used for errors and for delete confirmations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Helper trait for converting errors to a status code plus `{Message}` body
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<MessageResponse>)>;
}

/// Not-found is a 404 with a fixed text; storage failures expose the raw driver text
impl<T> IntoResponseError<T> for Result<T, UserError> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<MessageResponse>)> {
        self.map_err(|e| match e {
            UserError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse::new("User not found")),
            ),
            UserError::Storage(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new(msg)),
            ),
        })
    }
}

/// Bodies that cannot be read as a user are a 500 carrying the parser's text,
/// the same as any other failure to store the record
impl<T> IntoResponseError<T> for Result<T, JsonRejection> {
    fn into_response_error(self) -> Result<T, (StatusCode, Json<MessageResponse>)> {
        self.map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse::new(rejection.body_text())),
            )
        })
    }
}
