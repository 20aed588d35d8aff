//! Handlers for `/api/auth`.

use mockable::Clock;
use tracing::error;

use super::dto::{CredentialsBody, LoginResponse, RegisterResponse};
use super::response::{ApiError, ApiResponse, ApiResult};
use crate::auth::ports::{IdentityProvider, IdentityProviderError};
use crate::auth::services::{AuthService, AuthServiceError};

/// Authentication endpoints bound to an authentication service.
pub struct AuthApi<'a, P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    service: &'a AuthService<P, C>,
}

impl<'a, P, C> AuthApi<'a, P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Binds the endpoints to a service.
    #[must_use]
    pub const fn new(service: &'a AuthService<P, C>) -> Self {
        Self { service }
    }

    /// `POST /api/auth/register`
    ///
    /// # Errors
    ///
    /// Returns 400 for malformed credentials or a provider rejection and 500
    /// when the provider cannot be reached.
    pub async fn register(&self, body: CredentialsBody) -> ApiResult<RegisterResponse> {
        match self.service.register(body.into()).await {
            Ok(sub) => Ok(ApiResponse::ok(RegisterResponse::from(sub))),
            Err(AuthServiceError::Domain(err)) => {
                Err(ApiError::bad_request("VALIDATION_FAILED", err.to_string()))
            }
            Err(AuthServiceError::Registration(IdentityProviderError::Rejected {
                code,
                message,
            })) => Err(ApiError::bad_request(&code, message)),
            Err(err) => {
                error!(error = %err, "registration failed");
                Err(ApiError::internal())
            }
        }
    }

    /// `POST /api/auth/login`
    ///
    /// # Errors
    ///
    /// Returns 400 for malformed credentials, 401 when the provider refuses
    /// the credentials or issues no tokens, and 500 when the provider cannot
    /// be reached.
    pub async fn login(&self, body: CredentialsBody) -> ApiResult<LoginResponse> {
        match self.service.login(body.into()).await {
            Ok(tokens) => Ok(ApiResponse::ok(LoginResponse::from(tokens))),
            Err(AuthServiceError::Domain(err)) => {
                Err(ApiError::bad_request("VALIDATION_FAILED", err.to_string()))
            }
            Err(AuthServiceError::Login(IdentityProviderError::Rejected { message, .. })) => {
                Err(ApiError::unauthorized(message))
            }
            Err(err @ AuthServiceError::MissingAuthenticationResult { .. }) => {
                Err(ApiError::unauthorized(err.to_string()))
            }
            Err(err) => {
                error!(error = %err, "login failed");
                Err(ApiError::internal())
            }
        }
    }
}
