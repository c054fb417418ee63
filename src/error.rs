use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised while authenticating a request. The variants stay distinct
/// internally (for logs and tests) but collapse at the HTTP boundary so the
/// client cannot tell which check failed.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("token signature mismatch")]
    InvalidSignature,
    #[error("token expired")]
    TokenExpired,
    #[error("malformed token")]
    TokenMalformed,
    #[error("token subject inactive or missing")]
    InactiveOrMissingUser,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Auth(AuthError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                "Incorrect username or password".to_string(),
            ),
            ApiError::Auth(e) => {
                tracing::warn!(error = %e, "request rejected");
                (
                    StatusCode::UNAUTHORIZED,
                    "Invalid or expired token".to_string(),
                )
            }
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let mut response = (status, Json(json!({ "detail": detail }))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn detail_of(err: ApiError) -> (StatusCode, Option<String>, String) {
        let response = err.into_response();
        let status = response.status();
        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        (status, challenge, body["detail"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn login_failure_is_unauthorized_with_challenge() {
        let (status, challenge, detail) = detail_of(AuthError::InvalidCredentials.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(challenge.as_deref(), Some("Bearer"));
        assert_eq!(detail, "Incorrect username or password");
    }

    #[tokio::test]
    async fn token_failures_collapse_to_one_message() {
        for err in [
            AuthError::InvalidSignature,
            AuthError::TokenExpired,
            AuthError::TokenMalformed,
            AuthError::InactiveOrMissingUser,
        ] {
            let (status, challenge, detail) = detail_of(err.into()).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(challenge.as_deref(), Some("Bearer"));
            assert_eq!(detail, "Invalid or expired token");
        }
    }

    #[tokio::test]
    async fn not_found_and_forbidden_stay_distinguishable() {
        let (status, challenge, detail) = detail_of(ApiError::NotFound("Post")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(challenge.is_none());
        assert_eq!(detail, "Post not found");

        let (status, _, detail) =
            detail_of(ApiError::Forbidden("Not authorized to update this post".into())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(detail, "Not authorized to update this post");
    }

    #[tokio::test]
    async fn internal_error_hides_the_cause() {
        let (status, _, detail) =
            detail_of(ApiError::Internal(anyhow::anyhow!("pool exhausted"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(detail, "Internal server error");
    }
}
