//! Given steps for user authentication BDD scenarios.

use super::world::{AuthWorld, CLIENT_ID, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::auth::{adapters::memory::InMemoryIdentityProvider, services::RegisterRequest};

#[given(r#"the identity provider demands the "{challenge}" challenge"#)]
fn provider_demands_challenge(world: &mut AuthWorld, challenge: String) {
    world.use_provider(InMemoryIdentityProvider::new(CLIENT_ID).with_challenge(challenge));
}

#[given(r#"a registered user "{email}" with password "{password}""#)]
fn registered_user(
    world: &mut AuthWorld,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    run_async(world.service.register(RegisterRequest::new(email, password)))
        .wrap_err("register user for scenario")?;
    Ok(())
}
