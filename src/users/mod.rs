use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::register).get(handlers::list_users))
        .route("/users/me", get(handlers::me).put(handlers::update_me))
        .route("/users/:id", get(handlers::get_user))
}
