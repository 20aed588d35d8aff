//! Validated credential types.

use super::AuthDomainError;
use std::fmt;

/// Trimmed email address used as the identity-provider username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Only the shape `local@domain` is checked; deliverability is the
    /// identity provider's concern.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyEmail`] when the value is blank or
    /// [`AuthDomainError::InvalidEmail`] when it has no non-empty local part
    /// and domain around a single `@`.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AuthDomainError::EmptyEmail);
        }

        let is_valid = trimmed.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }) && !trimmed.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(AuthDomainError::InvalidEmail(raw));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Password forwarded verbatim to the identity provider.
///
/// The value is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a password.
    ///
    /// Strength rules belong to the identity provider; only emptiness is
    /// rejected here.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyPassword`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(AuthDomainError::EmptyPassword);
        }
        Ok(Self(raw))
    }

    /// Exposes the secret for forwarding to the provider.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
