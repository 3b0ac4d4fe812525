//! Router for the user CRUD endpoints

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::LatencyUnit;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use user_crud::UserStore;

use crate::handlers::{create_user, delete_user, list_users, read_user, update_user};

/// Create the router for all user endpoints
///
/// The endpoints are:
/// - `GET /` list every user
/// - `POST /userRegistration` create a user
/// - `GET /read/{id}` fetch one user, wrapped in a one-element array
/// - `PUT /update/{id}` overwrite a user's fields
/// - `DELETE /delete/{id}` remove a user
///
/// Requests are traced, and CORS is open so a browser client on another
/// origin can call the API directly.
pub fn user_crud_router(store: UserStore) -> Router {
    routes()
        .with_state(store)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(CorsLayer::permissive())
}

fn routes() -> Router<UserStore> {
    Router::new()
        .route("/", get(list_users))
        .route("/userRegistration", post(create_user))
        .route("/read/{id}", get(read_user))
        .route("/update/{id}", put(update_user))
        .route("/delete/{id}", delete(delete_user))
}
