use axum::{routing::post, Router};

use crate::state::AppState;

pub mod claims;
mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/token", post(handlers::login))
}
