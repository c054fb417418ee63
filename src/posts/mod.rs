use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod ownership;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", post(handlers::create_post).get(handlers::list_posts))
        .route(
            "/posts/:id",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .route("/users/:id/posts", get(handlers::list_user_posts))
}
