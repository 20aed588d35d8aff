//! Explicit wiring of adapters and services.
//!
//! [`AppServices`] owns one project service and one authentication service.
//! Production wiring uses `PostgreSQL` and Cognito; the in-memory variant
//! backs tests and local runs without external dependencies.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::{Clock, DefaultClock};
use thiserror::Error;
use tracing::info;

use crate::auth::adapters::cognito::CognitoIdentityProvider;
use crate::auth::adapters::memory::InMemoryIdentityProvider;
use crate::auth::ports::IdentityProvider;
use crate::auth::services::AuthService;
use crate::config::AppConfig;
use crate::project::adapters::memory::InMemoryProjectRepository;
use crate::project::adapters::postgres::PostgresProjectRepository;
use crate::project::ports::ProjectRepository;
use crate::project::services::ProjectService;

/// Errors raised while wiring application services.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The database connection pool could not be built.
    #[error("failed to build database pool: {0}")]
    Pool(#[from] PoolError),
}

/// Services wired against `PostgreSQL` and Cognito.
pub type ProductionServices =
    AppServices<PostgresProjectRepository, CognitoIdentityProvider, DefaultClock>;

/// Services wired against in-memory adapters.
pub type InMemoryServices =
    AppServices<InMemoryProjectRepository, InMemoryIdentityProvider, DefaultClock>;

/// Application service graph.
#[derive(Clone)]
pub struct AppServices<R, P, C>
where
    R: ProjectRepository,
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    projects: ProjectService<R>,
    auth: AuthService<P, C>,
}

impl<R, P, C> AppServices<R, P, C>
where
    R: ProjectRepository,
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Assembles a graph from already constructed services.
    #[must_use]
    pub const fn new(projects: ProjectService<R>, auth: AuthService<P, C>) -> Self {
        Self { projects, auth }
    }

    /// Returns the project service.
    #[must_use]
    pub const fn projects(&self) -> &ProjectService<R> {
        &self.projects
    }

    /// Returns the authentication service.
    #[must_use]
    pub const fn auth(&self) -> &AuthService<P, C> {
        &self.auth
    }
}

impl ProductionServices {
    /// Builds the connection pool and wires production adapters.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::Pool`] when the pool cannot open its initial
    /// connections.
    pub fn connect(config: &AppConfig) -> Result<Self, ContextError> {
        let database = config.database();
        let manager = ConnectionManager::<PgConnection>::new(database.url());
        let pool = Pool::builder()
            .max_size(database.pool_size())
            .build(manager)?;
        info!(pool_size = database.pool_size(), "database pool ready");

        let cognito = config.cognito();
        let provider = CognitoIdentityProvider::from_settings(cognito);
        info!(endpoint = provider.endpoint(), "identity provider configured");

        Ok(Self::new(
            ProjectService::new(Arc::new(PostgresProjectRepository::new(pool))),
            AuthService::new(
                Arc::new(provider),
                Arc::new(DefaultClock),
                cognito.client_id(),
            ),
        ))
    }
}

impl InMemoryServices {
    /// Wires in-memory adapters for the given app client.
    #[must_use]
    pub fn in_memory(client_id: &str) -> Self {
        Self::with_repository(InMemoryProjectRepository::new(), client_id)
    }

    /// Wires in-memory adapters around an existing project repository.
    #[must_use]
    pub fn with_repository(repository: InMemoryProjectRepository, client_id: &str) -> Self {
        Self::new(
            ProjectService::new(Arc::new(repository)),
            AuthService::new(
                Arc::new(InMemoryIdentityProvider::new(client_id)),
                Arc::new(DefaultClock),
                client_id,
            ),
        )
    }
}
