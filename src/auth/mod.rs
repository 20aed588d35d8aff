//! User registration and login for Taskboard.
//!
//! Credentials are never stored locally. Registration and login are
//! forwarded to a managed identity provider (an AWS Cognito user pool in
//! production) and the provider's subject identifier or tokens are relayed
//! back. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
