//! Request guards shared by HTTP handlers.

pub mod auth;

pub use auth::AdminUser;
