//! Then steps for user authentication BDD scenarios.

use super::world::AuthWorld;
use rstest_bdd_macros::then;
use taskboard::auth::{
    domain::AuthTokens,
    ports::IdentityProviderError,
    services::AuthServiceError,
};

fn login_result(world: &AuthWorld) -> Result<&Result<AuthTokens, AuthServiceError>, eyre::Report> {
    world
        .last_login_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing login result in scenario world"))
}

#[then("login returns an access token")]
fn login_returns_token(world: &AuthWorld) -> Result<(), eyre::Report> {
    match login_result(world)? {
        Ok(tokens) if !tokens.access_token().is_empty() => Ok(()),
        Ok(_) => Err(eyre::eyre!("login returned an empty access token")),
        Err(err) => Err(eyre::eyre!("expected login to succeed, got {err}")),
    }
}

#[then(r#"login is refused with "{message}""#)]
fn login_refused(world: &AuthWorld, message: String) -> Result<(), eyre::Report> {
    match login_result(world)? {
        Err(AuthServiceError::Login(IdentityProviderError::Rejected {
            message: actual, ..
        })) if *actual == message => Ok(()),
        other => Err(eyre::eyre!("expected refusal '{message}', got {other:?}")),
    }
}

#[then(r#"login fails awaiting the "{challenge}" challenge"#)]
fn login_awaits_challenge(world: &AuthWorld, challenge: String) -> Result<(), eyre::Report> {
    match login_result(world)? {
        Err(AuthServiceError::MissingAuthenticationResult {
            challenge: Some(actual),
        }) if *actual == challenge => Ok(()),
        other => Err(eyre::eyre!("expected challenge '{challenge}', got {other:?}")),
    }
}

#[then(r#"registration is rejected with code "{code}""#)]
fn registration_rejected(world: &AuthWorld, code: String) -> Result<(), eyre::Report> {
    let result = world
        .last_register_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration result in scenario world"))?;
    match result {
        Err(AuthServiceError::Registration(IdentityProviderError::Rejected {
            code: actual, ..
        })) if *actual == code => Ok(()),
        other => Err(eyre::eyre!("expected rejection code '{code}', got {other:?}")),
    }
}
