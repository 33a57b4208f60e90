//! Business logic: the movie registry.

pub mod movie;

pub use movie::MovieService;
