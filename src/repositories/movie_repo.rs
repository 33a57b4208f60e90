//! In-memory movie storage: an ordered list behind a single lock.

use crate::models::movie::Movie;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Ordered movie collection. Clones share the same underlying list.
#[derive(Clone, Default)]
pub struct MovieRepository {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl MovieRepository {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }

    /// All records in insertion order.
    pub async fn all(&self) -> Vec<Movie> {
        self.movies.read().await.clone()
    }

    pub async fn find_by_id(&self, id: i64) -> Option<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .find(|m| m.id == Some(id))
            .cloned()
    }

    /// Exact, case-sensitive category match, optionally narrowed to one year.
    pub async fn find_by_category(&self, category: &str, year: Option<i32>) -> Vec<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .filter(|m| m.category == category && year.map_or(true, |y| m.year == y))
            .cloned()
            .collect()
    }

    pub async fn push(&self, movie: Movie) {
        self.movies.write().await.push(movie);
    }

    /// Overwrite title, year and category of the first record with `id`.
    /// Returns false when no record matches.
    pub async fn update(&self, id: i64, movie: Movie) -> bool {
        let mut movies = self.movies.write().await;
        match movies.iter_mut().find(|m| m.id == Some(id)) {
            Some(existing) => {
                existing.title = movie.title;
                existing.year = movie.year;
                existing.category = movie.category;
                true
            }
            None => false,
        }
    }

    /// Remove the first record with `id`. Returns false when no record matches.
    pub async fn remove(&self, id: i64) -> bool {
        let mut movies = self.movies.write().await;
        match movies.iter().position(|m| m.id == Some(id)) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }
}
