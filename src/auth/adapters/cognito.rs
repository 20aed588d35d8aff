//! AWS Cognito user pool adapter.
//!
//! `SignUp` and `InitiateAuth` with `USER_PASSWORD_AUTH` are public app
//! client operations, so requests are plain JSON posts without request
//! signing.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::ports::{
    IdentityProvider, IdentityProviderError, IdentityProviderResult, InitiateAuthRequest,
    InitiateAuthResponse, SignUpRequest, SignUpResponse,
};
use crate::config::CognitoSettings;

/// Media type of the Cognito JSON protocol.
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Target prefix for Cognito user pool operations.
const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";

/// Cognito identity provider reached over HTTPS.
#[derive(Debug, Clone)]
pub struct CognitoIdentityProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl CognitoIdentityProvider {
    /// Creates a provider for the regional Cognito endpoint.
    #[must_use]
    pub fn new(region: &str) -> Self {
        Self::with_endpoint(regional_endpoint(region))
    }

    /// Creates a provider posting to an explicit endpoint, such as a local
    /// emulator.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Creates a provider from configured Cognito settings.
    #[must_use]
    pub fn from_settings(settings: &CognitoSettings) -> Self {
        Self::with_endpoint(settings.endpoint())
    }

    /// Returns the endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<Req, Resp>(&self, operation: &str, body: &Req) -> IdentityProviderResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(IdentityProviderError::invalid_response)?;
        debug!(operation, endpoint = %self.endpoint, "calling identity provider");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, AMZ_JSON)
            .header("X-Amz-Target", format!("{TARGET_PREFIX}.{operation}"))
            .body(payload)
            .send()
            .await
            .map_err(IdentityProviderError::transport)?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(IdentityProviderError::transport)?;

        if !status.is_success() {
            return Err(parse_error_body(status.as_u16(), &bytes));
        }
        serde_json::from_slice(&bytes).map_err(IdentityProviderError::invalid_response)
    }
}

/// Builds the public Cognito endpoint URL for a region.
#[must_use]
pub fn regional_endpoint(region: &str) -> String {
    format!("https://cognito-idp.{region}.amazonaws.com/")
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    #[serde(rename = "__type")]
    kind: String,
    #[serde(alias = "Message")]
    message: String,
}

/// Converts a non-success Cognito response body into a port error.
///
/// Error types may carry a namespace prefix (`ns#Code`); only the code is
/// kept. Unparseable bodies fall back to the HTTP status. Client errors are
/// rejections; server errors mean the provider is unavailable.
pub(crate) fn parse_error_body(status: u16, body: &[u8]) -> IdentityProviderError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let code = parsed
        .kind
        .rsplit('#')
        .next()
        .filter(|code| !code.is_empty())
        .map_or_else(|| format!("HttpStatus{status}"), str::to_owned);
    let message = if parsed.message.is_empty() {
        String::from_utf8_lossy(body).trim().to_owned()
    } else {
        parsed.message
    };
    if status >= 500 {
        return IdentityProviderError::Unavailable {
            status,
            code,
            message,
        };
    }
    IdentityProviderError::rejected(code, message)
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> IdentityProviderResult<SignUpResponse> {
        self.call("SignUp", request).await
    }

    async fn initiate_auth(
        &self,
        request: &InitiateAuthRequest,
    ) -> IdentityProviderResult<InitiateAuthResponse> {
        self.call("InitiateAuth", request).await
    }
}
