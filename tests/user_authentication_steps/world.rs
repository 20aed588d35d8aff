//! Shared world state for user authentication BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::auth::{
    adapters::memory::InMemoryIdentityProvider,
    domain::{AuthTokens, UserSub},
    services::{AuthService, AuthServiceError},
};

/// App client identifier shared by the world's provider and service.
pub const CLIENT_ID: &str = "scenario-client";

/// Service type used by the BDD world.
pub type TestAuthService = AuthService<InMemoryIdentityProvider, DefaultClock>;

/// Scenario world for authentication behaviour tests.
pub struct AuthWorld {
    /// The authentication service under test.
    pub service: TestAuthService,
    /// Result of the last registration attempt.
    pub last_register_result: Option<Result<UserSub, AuthServiceError>>,
    /// Result of the last login attempt.
    pub last_login_result: Option<Result<AuthTokens, AuthServiceError>>,
}

impl AuthWorld {
    /// Creates a world over an empty user pool.
    #[must_use]
    pub fn new() -> Self {
        Self::over(InMemoryIdentityProvider::new(CLIENT_ID))
    }

    /// Replaces the service with one over the given provider.
    pub fn use_provider(&mut self, provider: InMemoryIdentityProvider) {
        *self = Self::over(provider);
    }

    fn over(provider: InMemoryIdentityProvider) -> Self {
        Self {
            service: AuthService::new(Arc::new(provider), Arc::new(DefaultClock), CLIENT_ID),
            last_register_result: None,
            last_login_result: None,
        }
    }
}

impl Default for AuthWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AuthWorld {
    AuthWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
