//! Auth application service: the single admin identity allowed to log in.

use crate::auth::jwt::{TokenClaims, TokenService};
use crate::error::{AppError, AppResult};
use tracing::debug;

/// Configured admin credentials. Login and the admin gate both check against these.
#[derive(Clone)]
pub struct AdminCredentials {
    email: String,
    password: String,
}

impl AdminCredentials {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    pub fn is_admin(&self, claims: &TokenClaims) -> bool {
        claims.email == self.email
    }
}

pub struct AuthAppService;

impl AuthAppService {
    /// Exchange admin credentials for a bearer token. Only the email is signed
    /// into the token.
    pub fn login(
        admin: &AdminCredentials,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> AppResult<String> {
        if !admin.matches(email, password) {
            debug!(email = %email, "login rejected");
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }
        let token = tokens.issue(&TokenClaims {
            email: email.to_string(),
        })?;
        Ok(token)
    }
}
