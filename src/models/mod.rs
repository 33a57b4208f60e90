//! Data models for movies and registry queries.

pub mod movie;

pub use movie::*;
