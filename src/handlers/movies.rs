//! Movie CRUD handlers.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::AppError;
use crate::handlers::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::http::AppState;
use crate::middleware::auth::AdminUser;
use crate::models::movie::{CategoryQuery, Confirmation, Movie, MovieIdPath};

/// GET /movies — admin only.
pub async fn list_movies(_admin: AdminUser, State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.movies().list().await)
}

/// GET /movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(path): AppPath<MovieIdPath>,
) -> Result<Json<Movie>, AppError> {
    path.validate()?;
    let movie = state.movies().get(path.id).await?;
    Ok(Json(movie))
}

/// GET /movies/?category=...&year=...
pub async fn movies_by_category(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CategoryQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.movies().list_by_category(&query).await?;
    Ok(Json(movies))
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(body): AppJson<Movie>,
) -> Result<(StatusCode, Json<Confirmation>), AppError> {
    state.movies().create(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(Confirmation::new("The movie was registered")),
    ))
}

/// PUT /movies/:id
pub async fn update_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<Movie>,
) -> Result<Json<Confirmation>, AppError> {
    state.movies().update(id, body).await?;
    Ok(Json(Confirmation::new("The movie was updated")))
}

/// DELETE /movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Confirmation>, AppError> {
    state.movies().delete(id).await?;
    Ok(Json(Confirmation::new("The movie was deleted")))
}
