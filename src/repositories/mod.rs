//! Storage for movie records.

pub mod movie_repo;

pub use movie_repo::MovieRepository;
