//! HTTP request handlers.

pub mod extract;
pub mod http;
pub mod movies;

pub use extract::{AppJson, AppPath, AppQuery};
pub use http::*;
pub use movies::*;
