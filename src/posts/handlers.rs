use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::CurrentUser, error::ApiError, state::AppState, users::dto::Pagination,
};

use super::{
    dto::{CreatePostRequest, DeletedResponse, PostResponse, UpdatePostRequest},
    ownership::{authorize_mutation, Decision, DenyReason},
    repo::Post,
};

#[instrument(skip_all)]
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("Title must not be empty".into()));
    }

    let post = Post::create(
        &state.db,
        actor.id,
        &payload.title,
        &payload.content,
        payload.is_published,
    )
    .await?;

    info!(post_id = %post.id, author_id = %actor.id, "post created");
    Ok((StatusCode::CREATED, Json(post.into())))
}

#[instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = Post::list(&state.db, p.limit, p.skip).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = Post::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;
    Ok(Json(post.into()))
}

#[instrument(skip(state))]
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = Post::list_by_author(&state.db, user_id, p.limit, p.skip).await?;
    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

#[instrument(skip_all, fields(%id))]
pub async fn update_post(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    // Resolve first: a missing post is 404, never 403.
    let post = Post::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    match authorize_mutation(&actor, &post) {
        Decision::Allow => {}
        Decision::Deny(DenyReason::NotOwner) => {
            warn!(post_id = %post.id, actor_id = %actor.id, "update denied");
            return Err(ApiError::Forbidden(
                "Not authorized to update this post".into(),
            ));
        }
    }

    let updated = Post::update(
        &state.db,
        id,
        payload.title.as_deref(),
        payload.content.as_deref(),
        payload.is_published,
    )
    .await?;

    info!(post_id = %updated.id, actor_id = %actor.id, "post updated");
    Ok(Json(updated.into()))
}

#[instrument(skip_all, fields(%id))]
pub async fn delete_post(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let post = Post::find(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Post"))?;

    match authorize_mutation(&actor, &post) {
        Decision::Allow => {}
        Decision::Deny(DenyReason::NotOwner) => {
            warn!(post_id = %post.id, actor_id = %actor.id, "delete denied");
            return Err(ApiError::Forbidden(
                "Not authorized to delete this post".into(),
            ));
        }
    }

    Post::delete(&state.db, id).await?;

    info!(post_id = %id, actor_id = %actor.id, "post deleted");
    Ok(Json(DeletedResponse {
        message: "Post deleted successfully",
    }))
}
