//! Authentication: login and bearer tokens.

mod handlers;
mod jwt;
mod service;

pub use handlers::{login, LoginRequest, LoginResponse};
pub use jwt::{TokenClaims, TokenError, TokenService};
pub use service::{AdminCredentials, AuthAppService};
