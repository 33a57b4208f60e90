//! Movie record and the request shapes used to query the registry.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// A movie record. `id` is whatever the caller supplied; the registry never assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Movie {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 5, max = 20))]
    pub title: String,
    pub year: i32,
    #[validate(length(min = 5, max = 20))]
    pub category: String,
}

impl Movie {
    pub fn new(id: Option<i64>, title: &str, year: i32, category: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            year,
            category: category.to_string(),
        }
    }

    /// Field constraints plus `year <= current year`, which the derive cannot express.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(e) => e,
        };
        let current = current_year();
        if self.year > current {
            let mut err = ValidationError::new("range");
            err.add_param("max".into(), &current);
            err.add_param("value".into(), &self.year);
            errors.add("year", err);
        }
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Records present at startup.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new(Some(1), "Avatar", 2009, "Action"),
        Movie::new(Some(2), "Interstellar", 2014, "Sci-fi"),
    ]
}

/// Query for `GET /movies/`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CategoryQuery {
    #[validate(length(min = 5, max = 15))]
    pub category: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Path for `GET /movies/:id`.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct MovieIdPath {
    #[validate(range(min = 1, max = 2000))]
    pub id: i64,
}

/// Body of every successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

impl Confirmation {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
