//! HTTP handlers: shared state, greeting and health.

use axum::{http::StatusCode, response::Html, Json};
use serde_json::json;

use crate::auth::{AdminCredentials, TokenService};
use crate::services::MovieService;

/// Shared application state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub movies: MovieService,
    pub tokens: TokenService,
    pub admin: AdminCredentials,
}

impl AppState {
    pub fn movies(&self) -> &MovieService {
        &self.movies
    }
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
    pub fn admin(&self) -> &AdminCredentials {
        &self.admin
    }
}

/// GET /
pub async fn home() -> Html<&'static str> {
    Html("<h1>Hello world!</h1>")
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "movies" })),
    )
}
