//! Movie registry: validated CRUD over the in-memory repository.

use crate::error::{AppError, AppResult};
use crate::models::movie::{seed_movies, CategoryQuery, Movie};
use crate::repositories::MovieRepository;
use tracing::{debug, info};
use validator::Validate;

/// CRUD operations on movies. Validation runs before any mutation; id misses
/// become `AppError::NotFound`.
#[derive(Clone)]
pub struct MovieService {
    repo: MovieRepository,
}

impl MovieService {
    pub fn new(repo: MovieRepository) -> Self {
        Self { repo }
    }

    /// Registry holding the two startup records.
    pub fn seeded() -> Self {
        Self::new(MovieRepository::new(seed_movies()))
    }

    pub async fn list(&self) -> Vec<Movie> {
        self.repo.all().await
    }

    pub async fn list_by_category(&self, query: &CategoryQuery) -> AppResult<Vec<Movie>> {
        query.validate()?;
        Ok(self.repo.find_by_category(&query.category, query.year).await)
    }

    pub async fn get(&self, id: i64) -> AppResult<Movie> {
        self.repo.find_by_id(id).await.ok_or_else(|| {
            debug!(id, "movie not found");
            not_found(id)
        })
    }

    pub async fn create(&self, movie: Movie) -> AppResult<()> {
        movie.check()?;
        info!(id = ?movie.id, title = %movie.title, "movie registered");
        self.repo.push(movie).await;
        Ok(())
    }

    pub async fn update(&self, id: i64, movie: Movie) -> AppResult<()> {
        movie.check()?;
        if !self.repo.update(id, movie).await {
            debug!(id, "update target not found");
            return Err(not_found(id));
        }
        info!(id, "movie updated");
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repo.remove(id).await {
            debug!(id, "delete target not found");
            return Err(not_found(id));
        }
        info!(id, "movie deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Movie {} not found", id))
}
