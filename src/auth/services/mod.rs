//! Application services for authentication.

mod auth;

pub use auth::{AuthService, AuthServiceError, AuthServiceResult, LoginRequest, RegisterRequest};
