//! When steps for user authentication BDD scenarios.

use super::world::{AuthWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::auth::services::{LoginRequest, RegisterRequest};

#[when(r#""{email}" logs in with password "{password}""#)]
fn user_logs_in(world: &mut AuthWorld, email: String, password: String) {
    let result = run_async(world.service.login(LoginRequest::new(email, password)));
    world.last_login_result = Some(result);
}

#[when(r#""{email}" registers with password "{password}""#)]
fn user_registers(world: &mut AuthWorld, email: String, password: String) {
    let result = run_async(world.service.register(RegisterRequest::new(email, password)));
    world.last_register_result = Some(result);
}
