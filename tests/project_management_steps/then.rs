//! Then steps for project management BDD scenarios.

use super::world::{ProjectWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::project::{
    domain::{ProjectDomainError, ProjectId},
    services::ProjectServiceError,
};

#[then("listing projects returns {count:usize} entries")]
fn listing_returns_count(world: &mut ProjectWorld, count: usize) -> Result<(), eyre::Report> {
    let projects = run_async(world.service.get_all_projects())
        .map_err(|err| eyre::eyre!("get_all_projects failed: {err}"))?;
    if projects.len() != count {
        return Err(eyre::eyre!(
            "expected {count} projects, found {}",
            projects.len()
        ));
    }
    Ok(())
}

fn ensure_named(world: &ProjectWorld, id: ProjectId, name: &str) -> Result<(), eyre::Report> {
    let project = run_async(world.service.get_project_by_id(id))
        .map_err(|err| eyre::eyre!("get_project_by_id failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("expected project {id} to exist"))?;
    if project.name().as_str() != name {
        return Err(eyre::eyre!(
            "expected project {id} to be named '{name}', found '{}'",
            project.name()
        ));
    }
    Ok(())
}

#[then(r#"project {id:i32} is named "{name}""#)]
fn project_is_named(world: &ProjectWorld, id: i32, name: String) -> Result<(), eyre::Report> {
    ensure_named(world, ProjectId::new(id)?, &name)
}

#[then(r#"the created project is named "{name}""#)]
fn created_project_is_named(world: &ProjectWorld, name: String) -> Result<(), eyre::Report> {
    ensure_named(world, world.created_id()?, &name)
}

#[then("the update succeeds")]
fn update_succeeds(world: &ProjectWorld) -> Result<(), eyre::Report> {
    match world.last_update_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected update to succeed, got {err}")),
        None => Err(eyre::eyre!("missing update result in scenario world")),
    }
}

#[then("the update fails with a not found error")]
fn update_fails_not_found(world: &ProjectWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
    if !matches!(result, Err(ProjectServiceError::NotFound(_))) {
        return Err(eyre::eyre!("expected not found error, got {result:?}"));
    }
    Ok(())
}

#[then("the addition fails with a validation error")]
fn addition_fails_validation(world: &ProjectWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing addition result in scenario world"))?;
    if !matches!(
        result,
        Err(ProjectServiceError::Domain(ProjectDomainError::EmptyProjectName))
    ) {
        return Err(eyre::eyre!("expected empty name error, got {result:?}"));
    }
    Ok(())
}

#[then("the second deletion removed nothing")]
fn second_deletion_removed_nothing(world: &ProjectWorld) -> Result<(), eyre::Report> {
    if world.delete_outcomes != [true, false] {
        return Err(eyre::eyre!(
            "expected delete outcomes [true, false], found {:?}",
            world.delete_outcomes
        ));
    }
    Ok(())
}
