//! Environment-driven configuration.
//!
//! Values are read from process environment variables, optionally seeded
//! from a `.env` file in the working directory:
//!
//! | Variable              | Required | Meaning                              |
//! |-----------------------|----------|--------------------------------------|
//! | `DATABASE_URL`        | yes      | `PostgreSQL` connection URL          |
//! | `DATABASE_POOL_SIZE`  | no       | Maximum pooled connections (10)      |
//! | `AWS_REGION`          | yes      | Region hosting the user pool         |
//! | `AWS_USER_POOL_ID`    | yes      | Cognito user pool identifier         |
//! | `AWS_CLIENT_ID`       | yes      | Cognito app client identifier        |
//! | `COGNITO_ENDPOINT`    | no       | Override for the Cognito endpoint    |

use crate::auth::adapters::cognito::regional_endpoint;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `.env` file exists but could not be read or parsed.
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    /// Environment variables could not be deserialized.
    #[error("invalid environment configuration: {0}")]
    Environment(#[from] envy::Error),

    /// A required variable is present but blank.
    #[error("configuration variable {0} must not be empty")]
    Empty(&'static str),

    /// The pool size is zero.
    #[error("DATABASE_POOL_SIZE must be at least 1")]
    ZeroPoolSize,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    database_url: String,
    #[serde(default = "default_pool_size")]
    database_pool_size: u32,
    aws_region: String,
    aws_user_pool_id: String,
    aws_client_id: String,
    #[serde(default)]
    cognito_endpoint: Option<String>,
}

const fn default_pool_size() -> u32 {
    DEFAULT_POOL_SIZE
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseSettings {
    url: String,
    pool_size: u32,
}

impl DatabaseSettings {
    /// Returns the connection URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }
}

/// Cognito user pool settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CognitoSettings {
    region: String,
    user_pool_id: String,
    client_id: String,
    endpoint_override: Option<String>,
}

impl CognitoSettings {
    /// Creates settings for a user pool and app client in a region.
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        user_pool_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            user_pool_id: user_pool_id.into(),
            client_id: client_id.into(),
            endpoint_override: None,
        }
    }

    /// Routes provider calls to an explicit endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }

    /// Returns the region.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Returns the user pool identifier.
    #[must_use]
    pub fn user_pool_id(&self) -> &str {
        &self.user_pool_id
    }

    /// Returns the app client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the endpoint provider calls are posted to.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.endpoint_override
            .clone()
            .unwrap_or_else(|| regional_endpoint(&self.region))
    }

    /// Returns the issuer expected in tokens minted by the user pool.
    #[must_use]
    pub fn issuer(&self) -> String {
        format!(
            "https://cognito-idp.{}.amazonaws.com/{}",
            self.region, self.user_pool_id
        )
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    database: DatabaseSettings,
    cognito: CognitoSettings,
}

impl AppConfig {
    /// Loads configuration from `.env` (if present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the `.env` file is malformed or a
    /// variable is missing, blank, or unparseable.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(ConfigError::DotEnv(err)),
        }
        Self::from_raw(envy::from_env::<RawConfig>()?)
    }

    /// Builds configuration from explicit key/value pairs using the same
    /// variable names as the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing, blank, or
    /// unparseable.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::from_raw(envy::from_iter::<_, RawConfig>(vars)?)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            database_url,
            database_pool_size,
            aws_region,
            aws_user_pool_id,
            aws_client_id,
            cognito_endpoint,
        } = raw;

        if database_pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }

        let mut cognito = CognitoSettings::new(
            non_empty("AWS_REGION", aws_region)?,
            non_empty("AWS_USER_POOL_ID", aws_user_pool_id)?,
            non_empty("AWS_CLIENT_ID", aws_client_id)?,
        );
        if let Some(endpoint) = cognito_endpoint.filter(|value| !value.trim().is_empty()) {
            cognito = cognito.with_endpoint(endpoint);
        }

        Ok(Self {
            database: DatabaseSettings {
                url: non_empty("DATABASE_URL", database_url)?,
                pool_size: database_pool_size,
            },
            cognito,
        })
    }

    /// Returns the database settings.
    #[must_use]
    pub const fn database(&self) -> &DatabaseSettings {
        &self.database
    }

    /// Returns the Cognito settings.
    #[must_use]
    pub const fn cognito(&self) -> &CognitoSettings {
        &self.cognito
    }
}

fn non_empty(name: &'static str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty(name));
    }
    Ok(trimmed.to_owned())
}
