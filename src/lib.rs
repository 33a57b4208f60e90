//! Movie registry HTTP service built with Rust.
//!
//! In-memory CRUD over movie records, with bearer-token login guarding the
//! full listing.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;
pub use services::movie::MovieService;

use axum::routing::{get, post};
use handlers::{http, movies};
use tower_http::trace::TraceLayer;

/// Build the API router. Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(http::home))
        .route("/health", get(http::health))
        .route("/login", post(auth::login))
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route("/movies/", get(movies::movies_by_category))
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
