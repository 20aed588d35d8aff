//! Port contracts for authentication.
//!
//! The identity-provider port mirrors the request and response shapes of the
//! Cognito user pool API so that adapters can serialize them directly.

pub mod identity_provider;

pub use identity_provider::{
    AttributeType, AuthFlow, AuthenticationResult, IdentityProvider, IdentityProviderError,
    IdentityProviderResult, InitiateAuthRequest, InitiateAuthResponse, SignUpRequest,
    SignUpResponse,
};
