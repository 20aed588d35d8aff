//! Identity-provider port for user sign-up and password authentication.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity-provider operations.
pub type IdentityProviderResult<T> = Result<T, IdentityProviderError>;

/// Managed identity provider contract.
///
/// Each call is one stateless request/response exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates a user account.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Rejected`] when the provider refuses
    /// the request (for example a duplicate username or weak password).
    async fn sign_up(&self, request: &SignUpRequest) -> IdentityProviderResult<SignUpResponse>;

    /// Starts an authentication flow.
    ///
    /// A successful response may still carry no authentication result when
    /// the provider issues a challenge instead.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Rejected`] when the credentials are
    /// refused.
    async fn initiate_auth(
        &self,
        request: &InitiateAuthRequest,
    ) -> IdentityProviderResult<InitiateAuthResponse>;
}

/// Name/value user attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeType {
    /// Attribute name, such as `email`.
    pub name: String,
    /// Attribute value.
    pub value: String,
}

impl AttributeType {
    /// Creates a user attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Sign-up request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignUpRequest {
    /// App client identifier.
    pub client_id: String,
    /// Username to register.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Attributes stored with the user.
    pub user_attributes: Vec<AttributeType>,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("user_attributes", &self.user_attributes)
            .finish()
    }
}

/// Sign-up response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SignUpResponse {
    /// Subject identifier of the new user.
    pub user_sub: String,
    /// Whether the user was confirmed on creation.
    pub user_confirmed: bool,
}

/// Authentication flow selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthFlow {
    /// Username and password sent directly to the provider.
    UserPasswordAuth,
}

/// Authentication request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InitiateAuthRequest {
    /// Flow to run.
    pub auth_flow: AuthFlow,
    /// App client identifier.
    pub client_id: String,
    /// Flow parameters such as `USERNAME` and `PASSWORD`.
    pub auth_parameters: BTreeMap<String, String>,
}

impl InitiateAuthRequest {
    /// Builds a `USER_PASSWORD_AUTH` request.
    #[must_use]
    pub fn user_password(
        client_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let auth_parameters = BTreeMap::from([
            ("USERNAME".to_owned(), username.into()),
            ("PASSWORD".to_owned(), password.into()),
        ]);
        Self {
            auth_flow: AuthFlow::UserPasswordAuth,
            client_id: client_id.into(),
            auth_parameters,
        }
    }

    /// Returns the `USERNAME` parameter, if present.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.auth_parameters.get("USERNAME").map(String::as_str)
    }

    /// Returns the `PASSWORD` parameter, if present.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.auth_parameters.get("PASSWORD").map(String::as_str)
    }
}

impl fmt::Debug for InitiateAuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitiateAuthRequest")
            .field("auth_flow", &self.auth_flow)
            .field("client_id", &self.client_id)
            .field("username", &self.username())
            .finish_non_exhaustive()
    }
}

/// Tokens issued by a completed authentication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthenticationResult {
    /// Access token.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: Option<i64>,
    /// Identity token.
    pub id_token: Option<String>,
    /// Refresh token.
    pub refresh_token: Option<String>,
    /// Token type, normally `Bearer`.
    pub token_type: Option<String>,
}

/// Authentication response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InitiateAuthResponse {
    /// Tokens, present only when authentication completed.
    pub authentication_result: Option<AuthenticationResult>,
    /// Challenge the caller must answer before tokens are issued.
    pub challenge_name: Option<String>,
    /// Session handle for answering the challenge.
    pub session: Option<String>,
}

/// Errors returned by identity-provider adapters.
#[derive(Debug, Clone, Error)]
pub enum IdentityProviderError {
    /// The provider refused the request.
    #[error("{code}: {message}")]
    Rejected {
        /// Provider error code, such as `UsernameExistsException`.
        code: String,
        /// Provider message.
        message: String,
    },

    /// The provider failed on its side (HTTP 5xx).
    #[error("identity provider unavailable ({status}): {code}: {message}")]
    Unavailable {
        /// HTTP status of the reply.
        status: u16,
        /// Provider error code, such as `InternalErrorException`.
        code: String,
        /// Provider message.
        message: String,
    },

    /// The provider could not be reached.
    #[error("identity provider transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a body that could not be decoded.
    #[error("invalid identity provider response: {0}")]
    InvalidResponse(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityProviderError {
    /// Creates a rejection with the given provider code and message.
    pub fn rejected(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn invalid_response(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidResponse(Arc::new(err))
    }
}
