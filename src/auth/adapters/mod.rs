//! Adapter implementations for the identity-provider port.

pub mod cognito;
pub mod memory;
