//! Auth gate: admin bearer token extractor for protected routes.

use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::handlers::http::AppState;

/// Extractor: request carries a valid bearer token for the configured admin.
/// Adding it to a handler's arguments protects that route.
#[derive(Clone, Copy, Debug)]
pub struct AdminUser;

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                debug!("rejected request: missing or invalid Authorization header");
                AppError::Unauthorized("Missing or invalid Authorization header".to_string())
            })?;

        let claims = state.tokens().verify(bearer.token()).map_err(|e| {
            debug!(error = %e, "rejected request: token verification failed");
            AppError::from(e)
        })?;

        if !state.admin().is_admin(&claims) {
            warn!(email = %claims.email, "rejected request: not the admin identity");
            return Err(AppError::Forbidden("Invalid credentials".to_string()));
        }

        Ok(AdminUser)
    }
}
