use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use tracing::warn;

use crate::{
    error::{ApiError, AuthError},
    state::AppState,
    users::repo::User,
};

use super::jwt::JwtKeys;

/// Resolved acting identity of an authenticated request.
///
/// A structurally valid token is not enough: the subject must still map to an
/// existing, active user row at request time.
pub struct CurrentUser(pub User);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::TokenMalformed)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::TokenMalformed)?;

        let claims = JwtKeys::from_ref(state).verify(token)?;

        let user = User::find_by_username(&state.db, &claims.sub)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| {
                warn!(subject = %claims.sub, "token subject inactive or missing");
                AuthError::InactiveOrMissingUser
            })?;

        Ok(CurrentUser(user))
    }
}
