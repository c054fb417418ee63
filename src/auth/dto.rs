use serde::{Deserialize, Serialize};

/// Form body for login, OAuth2 password-flow style.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_serialization() {
        let response = TokenResponse {
            access_token: "abc.def.ghi".into(),
            token_type: "bearer",
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["access_token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "bearer");
    }
}
