//! Service layer relaying registration and login to the identity provider.

use crate::auth::{
    domain::{AuthDomainError, AuthTokens, EmailAddress, Password, UserSub},
    ports::{
        AttributeType, AuthenticationResult, IdentityProvider, IdentityProviderError,
        InitiateAuthRequest, SignUpRequest,
    },
};
use chrono::TimeDelta;
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for registering a user.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    email: String,
    password: String,
}

impl RegisterRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Request payload for logging in.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Service-level errors for authentication operations.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Credential validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),
    /// The provider refused or failed the sign-up.
    #[error("registration failed: {0}")]
    Registration(#[source] IdentityProviderError),
    /// The provider refused or failed the login.
    #[error("login failed: {0}")]
    Login(#[source] IdentityProviderError),
    /// The provider answered without issuing tokens.
    #[error("login failed: no authentication result returned")]
    MissingAuthenticationResult {
        /// Challenge the provider asked for instead, if any.
        challenge: Option<String>,
    },
}

/// Result type for authentication service operations.
pub type AuthServiceResult<T> = Result<T, AuthServiceError>;

/// Authentication orchestration service.
///
/// Stateless: every call is one exchange with the identity provider.
#[derive(Clone)]
pub struct AuthService<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    provider: Arc<P>,
    clock: Arc<C>,
    client_id: String,
}

impl<P, C> AuthService<P, C>
where
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates a new authentication service for the given app client.
    #[must_use]
    pub fn new(provider: Arc<P>, clock: Arc<C>, client_id: impl Into<String>) -> Self {
        Self {
            provider,
            clock,
            client_id: client_id.into(),
        }
    }

    /// Registers a user and returns the provider-issued subject identifier.
    ///
    /// The email doubles as the username and is also sent as the `email`
    /// attribute.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Domain`] for malformed credentials and
    /// [`AuthServiceError::Registration`] when the provider call fails or
    /// returns a blank subject.
    pub async fn register(&self, request: RegisterRequest) -> AuthServiceResult<UserSub> {
        let RegisterRequest { email, password } = request;
        let email_address = EmailAddress::new(email)?;
        let secret = Password::new(password)?;

        let sign_up = SignUpRequest {
            client_id: self.client_id.clone(),
            username: email_address.as_str().to_owned(),
            password: secret.expose().to_owned(),
            user_attributes: vec![AttributeType::new("email", email_address.as_str())],
        };

        let response = self.provider.sign_up(&sign_up).await.map_err(|err| {
            warn!(email = %email_address, error = %err, "registration rejected");
            AuthServiceError::Registration(err)
        })?;

        let user_sub = UserSub::new(response.user_sub).ok_or_else(|| {
            AuthServiceError::Registration(IdentityProviderError::invalid_response(
                std::io::Error::other("provider returned an empty user subject"),
            ))
        })?;
        info!(email = %email_address, user_sub = %user_sub, "registered user");
        Ok(user_sub)
    }

    /// Authenticates with email and password and returns the issued tokens.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Domain`] for malformed credentials,
    /// [`AuthServiceError::Login`] when the provider call fails, or
    /// [`AuthServiceError::MissingAuthenticationResult`] when the provider
    /// issues no tokens.
    pub async fn login(&self, request: LoginRequest) -> AuthServiceResult<AuthTokens> {
        let LoginRequest { email, password } = request;
        let email_address = EmailAddress::new(email)?;
        let secret = Password::new(password)?;

        let auth_request = InitiateAuthRequest::user_password(
            self.client_id.clone(),
            email_address.as_str(),
            secret.expose(),
        );

        let response = self
            .provider
            .initiate_auth(&auth_request)
            .await
            .map_err(|err| {
                warn!(email = %email_address, error = %err, "login rejected");
                AuthServiceError::Login(err)
            })?;

        let Some(result) = response
            .authentication_result
            .filter(|result| !result.access_token.is_empty())
        else {
            warn!(
                email = %email_address,
                challenge = ?response.challenge_name,
                "login returned no authentication result"
            );
            return Err(AuthServiceError::MissingAuthenticationResult {
                challenge: response.challenge_name,
            });
        };

        info!(email = %email_address, "user logged in");
        Ok(self.tokens_from_result(result))
    }

    fn tokens_from_result(&self, result: AuthenticationResult) -> AuthTokens {
        let AuthenticationResult {
            access_token,
            expires_in,
            id_token,
            refresh_token,
            token_type,
        } = result;

        let mut tokens = AuthTokens::new(access_token);
        if let Some(id) = id_token {
            tokens = tokens.with_id_token(id);
        }
        if let Some(refresh) = refresh_token {
            tokens = tokens.with_refresh_token(refresh);
        }
        if let Some(kind) = token_type {
            tokens = tokens.with_token_type(kind);
        }
        let expires_at = expires_in
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| self.clock.utc().checked_add_signed(lifetime));
        if let Some(instant) = expires_at {
            tokens = tokens.with_expires_at(instant);
        }
        tokens
    }
}
