use sqlx::PgPool;
use tracing::warn;

use crate::{
    error::{ApiError, AuthError},
    users::repo::User,
};

use super::password;

/// Checks a submitted credential pair against the stored hash.
///
/// Unknown usernames and wrong passwords are indistinguishable to the caller;
/// both fail with `InvalidCredentials`. Read-only.
pub async fn verify_credentials(
    db: &PgPool,
    username: &str,
    password: &str,
) -> Result<User, ApiError> {
    let user = match User::find_by_username(db, username).await? {
        Some(u) => u,
        None => {
            warn!(%username, "login with unknown username");
            return Err(AuthError::InvalidCredentials.into());
        }
    };

    if !password::verify_password(password, &user.password_hash)? {
        warn!(%username, user_id = %user.id, "login with invalid password");
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(user)
}
