mod dto;
pub mod handlers;
pub mod repo;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).fallback(handlers::method_not_allowed),
        )
        .route(
            "/users/create",
            post(handlers::create_user).fallback(handlers::method_not_allowed),
        )
        .route(
            "/users/delete",
            delete(handlers::delete_user).fallback(handlers::method_not_allowed),
        )
}
