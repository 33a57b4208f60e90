//! Application configuration loaded from environment.

use jsonwebtoken::Algorithm;
use std::net::SocketAddr;

/// Application configuration loaded from `.env` and environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g. `0.0.0.0:3000`).
    pub server_addr: SocketAddr,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// JWT signing algorithm. Only the HMAC family is accepted.
    pub jwt_algorithm: Algorithm,
    /// The only identity allowed to log in and to pass the admin gate.
    pub admin_email: String,
    pub admin_password: String,
    /// Log level: `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment. Call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigLoadError::Missing(key))
        };

        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let server_addr: SocketAddr = server_addr
            .parse()
            .map_err(|_| ConfigLoadError::InvalidServerAddr)?;

        let jwt_secret = required("JWT_SECRET")?;
        let jwt_algorithm =
            parse_algorithm(&lookup("JWT_ALGORITHM").unwrap_or_else(|| "HS256".to_string()))?;
        let admin_email = required("ADMIN_EMAIL")?;
        let admin_password = required("ADMIN_PASSWORD")?;
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            server_addr,
            jwt_secret,
            jwt_algorithm,
            admin_email,
            admin_password,
            log_level,
        })
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigLoadError> {
    let algorithm: Algorithm = value
        .trim()
        .to_uppercase()
        .parse()
        .map_err(|_| ConfigLoadError::InvalidAlgorithm(value.to_string()))?;
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        _ => Err(ConfigLoadError::InvalidAlgorithm(value.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Missing required variable {0}")]
    Missing(&'static str),
    #[error("Invalid SERVER_ADDR")]
    InvalidServerAddr,
    #[error("Unsupported JWT_ALGORITHM: {0} (expected HS256, HS384 or HS512)")]
    InvalidAlgorithm(String),
}
