//! Auth HTTP handlers: login.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthAppService;
use crate::error::AppError;
use crate::handlers::extract::AppJson;
use crate::handlers::http::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = AuthAppService::login(
        state.admin(),
        state.tokens(),
        &body.email,
        &body.password,
    )?;
    Ok(Json(LoginResponse { token }))
}
