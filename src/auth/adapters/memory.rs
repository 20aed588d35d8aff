//! In-memory identity provider for tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::auth::ports::{
    AuthenticationResult, IdentityProvider, IdentityProviderError, IdentityProviderResult,
    InitiateAuthRequest, InitiateAuthResponse, SignUpRequest, SignUpResponse,
};

/// Access token lifetime reported by the in-memory provider, in seconds.
const TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Minimum password length, counted in characters.
const MIN_PASSWORD_CHARS: usize = 8;

/// Thread-safe in-memory user pool.
///
/// Mimics the error codes of a Cognito user pool for the cases the
/// authentication service distinguishes.
#[derive(Debug, Clone)]
pub struct InMemoryIdentityProvider {
    client_id: String,
    pending_challenge: Option<String>,
    state: Arc<RwLock<InMemoryPoolState>>,
}

#[derive(Debug, Default)]
struct InMemoryPoolState {
    users: HashMap<String, StoredUser>,
}

#[derive(Debug, Clone)]
struct StoredUser {
    sub: String,
    password: String,
}

impl InMemoryIdentityProvider {
    /// Creates an empty user pool serving the given app client.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            pending_challenge: None,
            state: Arc::new(RwLock::new(InMemoryPoolState::default())),
        }
    }

    /// Makes every subsequent authentication answer with the named challenge
    /// instead of tokens.
    #[must_use]
    pub fn with_challenge(mut self, challenge_name: impl Into<String>) -> Self {
        self.pending_challenge = Some(challenge_name.into());
        self
    }

    /// Returns the number of registered users.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityProviderError::Transport`] when the state lock is
    /// poisoned.
    pub fn user_count(&self) -> IdentityProviderResult<usize> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.len())
    }

    fn check_client(&self, client_id: &str) -> IdentityProviderResult<()> {
        if client_id == self.client_id {
            return Ok(());
        }
        Err(IdentityProviderError::rejected(
            "ResourceNotFoundException",
            format!("User pool client {client_id} does not exist."),
        ))
    }
}

fn lock_error(err: impl ToString) -> IdentityProviderError {
    IdentityProviderError::transport(std::io::Error::other(err.to_string()))
}

fn not_authorized() -> IdentityProviderError {
    IdentityProviderError::rejected("NotAuthorizedException", "Incorrect username or password.")
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> IdentityProviderResult<SignUpResponse> {
        self.check_client(&request.client_id)?;
        if request.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(IdentityProviderError::rejected(
                "InvalidPasswordException",
                "Password did not conform with policy: Password not long enough",
            ));
        }

        let mut state = self.state.write().map_err(lock_error)?;
        if state.users.contains_key(&request.username) {
            return Err(IdentityProviderError::rejected(
                "UsernameExistsException",
                "User already exists",
            ));
        }

        let sub = Uuid::new_v4().to_string();
        state.users.insert(
            request.username.clone(),
            StoredUser {
                sub: sub.clone(),
                password: request.password.clone(),
            },
        );
        Ok(SignUpResponse {
            user_sub: sub,
            user_confirmed: false,
        })
    }

    async fn initiate_auth(
        &self,
        request: &InitiateAuthRequest,
    ) -> IdentityProviderResult<InitiateAuthResponse> {
        self.check_client(&request.client_id)?;
        let (Some(username), Some(password)) = (request.username(), request.password()) else {
            return Err(IdentityProviderError::rejected(
                "InvalidParameterException",
                "Missing required parameter USERNAME or PASSWORD",
            ));
        };

        let state = self.state.read().map_err(lock_error)?;
        let user = state.users.get(username).ok_or_else(not_authorized)?;
        if user.password != password {
            return Err(not_authorized());
        }

        if let Some(challenge) = &self.pending_challenge {
            return Ok(InitiateAuthResponse {
                authentication_result: None,
                challenge_name: Some(challenge.clone()),
                session: Some(Uuid::new_v4().to_string()),
            });
        }

        Ok(InitiateAuthResponse {
            authentication_result: Some(AuthenticationResult {
                access_token: format!("access.{}.{}", user.sub, Uuid::new_v4()),
                expires_in: Some(TOKEN_LIFETIME_SECONDS),
                id_token: Some(format!("id.{}.{}", user.sub, Uuid::new_v4())),
                refresh_token: Some(Uuid::new_v4().to_string()),
                token_type: Some("Bearer".to_owned()),
            }),
            challenge_name: None,
            session: None,
        })
    }
}
