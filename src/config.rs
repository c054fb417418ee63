use jsonwebtoken::Algorithm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;

        let algorithm = match std::env::var("JWT_ALGORITHM") {
            Ok(v) => v
                .parse::<Algorithm>()
                .map_err(|_| anyhow::anyhow!("unknown JWT_ALGORITHM: {v}"))?,
            Err(_) => Algorithm::HS256,
        };
        // Keys are derived from a shared secret, so only HMAC variants apply.
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            anyhow::bail!("JWT_ALGORITHM must be HS256, HS384 or HS512");
        }

        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            algorithm,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };
        Ok(Self { database_url, jwt })
    }
}
