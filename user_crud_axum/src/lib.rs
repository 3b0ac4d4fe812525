//! user_crud_axum - HTTP front door for the user-crud store
//!
//! Mount [`user_crud_router`] with a connected [`UserStore`] to serve the
//! five user routes.

mod error;
mod handlers;
mod router;

pub use error::{IntoResponseError, MessageResponse};
pub use handlers::UserRequest;
pub use router::user_crud_router;

// Re-export the store types so callers need only this crate to wire a server
pub use user_crud::{StoreConfig, User, UserError, UserStore};
