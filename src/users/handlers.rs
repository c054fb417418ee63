use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{extractors::CurrentUser, password},
    error::ApiError,
    state::AppState,
};

use super::{
    dto::{Pagination, PublicUser, RegisterRequest, UpdateProfileRequest},
    repo::User,
};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < 8 {
        return Err(ApiError::Validation("Password too short".into()));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    payload.email = payload.email.trim().to_lowercase();
    payload.username = payload.username.trim().to_string();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email".into()));
    }
    if payload.username.is_empty() {
        return Err(ApiError::Validation("Username must not be empty".into()));
    }
    validate_password(&payload.password)?;

    // Friendly 409s; the UNIQUE constraints are the authority under races.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }
    if User::find_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        warn!(username = %payload.username, "username already taken");
        return Err(ApiError::Conflict("Username already taken".into()));
    }

    let hash = password::hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.email, &payload.username, &hash).await?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = User::list(&state.db, p.limit, p.skip).await?;
    Ok(Json(users.into_iter().map(PublicUser::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    Ok(Json(user.into()))
}

#[instrument(skip_all)]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(user.into())
}

#[instrument(skip_all)]
pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(mut payload): Json<UpdateProfileRequest>,
) -> Result<Json<PublicUser>, ApiError> {
    if let Some(email) = payload.email.as_mut() {
        *email = email.trim().to_lowercase();
        if !is_valid_email(email) {
            return Err(ApiError::Validation("Invalid email".into()));
        }
        if let Some(existing) = User::find_by_email(&state.db, email).await? {
            if existing.id != actor.id {
                return Err(ApiError::Conflict("Email already registered".into()));
            }
        }
    }

    if let Some(username) = payload.username.as_mut() {
        *username = username.trim().to_string();
        if username.is_empty() {
            return Err(ApiError::Validation("Username must not be empty".into()));
        }
        if let Some(existing) = User::find_by_username(&state.db, username).await? {
            if existing.id != actor.id {
                return Err(ApiError::Conflict("Username already taken".into()));
            }
        }
    }

    let password_hash = match payload.password.as_deref() {
        Some(plain) => {
            validate_password(plain)?;
            Some(password::hash_password(plain)?)
        }
        None => None,
    };

    let user = User::update_profile(
        &state.db,
        actor.id,
        payload.email.as_deref(),
        payload.username.as_deref(),
        password_hash.as_deref(),
    )
    .await?;

    info!(user_id = %user.id, "profile updated");
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice bob@example.com"));
    }

    #[test]
    fn short_passwords_fail_validation() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long-enough").is_ok());
    }
}
