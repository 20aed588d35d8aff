//! Domain model for identity-provider backed authentication.

mod claims;
mod credentials;
mod error;
mod tokens;

pub use claims::Claims;
pub use credentials::{EmailAddress, Password};
pub use error::AuthDomainError;
pub use tokens::{AuthTokens, UserSub};
