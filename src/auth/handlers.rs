use axum::{
    extract::{FromRef, State},
    Form, Json,
};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

use super::{
    dto::{LoginForm, TokenResponse},
    jwt::JwtKeys,
    service,
};

/// POST /token. Form-encoded by contract with the original client.
#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = service::verify_credentials(&state.db, &form.username, &form.password).await?;

    let access_token = JwtKeys::from_ref(&state).sign(&user.username)?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
