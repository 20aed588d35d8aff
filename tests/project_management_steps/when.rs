//! When steps for project management BDD scenarios.

use super::world::{ProjectWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::project::{domain::ProjectId, services::ProjectRequest};

#[when(r#"a project named "{name}" described as "{description}" is added"#)]
fn project_added(world: &mut ProjectWorld, name: String, description: String) {
    let request = ProjectRequest::new(name).with_description(description);
    let result = run_async(world.service.add_project(request));
    if let Ok(ref created) = result {
        world.last_created = Some(created.clone());
    }
    world.last_add_result = Some(result);
}

#[when(r#"the project is renamed to "{name}" described as "{description}""#)]
fn project_renamed(
    world: &mut ProjectWorld,
    name: String,
    description: String,
) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    let request = ProjectRequest::new(name).with_description(description);
    world.last_update_result = Some(run_async(world.service.update_project(id, request)));
    Ok(())
}

#[when(r#"project {id:i32} is renamed to "{name}""#)]
fn numbered_project_renamed(
    world: &mut ProjectWorld,
    id: i32,
    name: String,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new(id)?;
    world.last_update_result = Some(run_async(
        world
            .service
            .update_project(project_id, ProjectRequest::new(name)),
    ));
    Ok(())
}

fn delete_created(world: &mut ProjectWorld) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    let removed = run_async(world.service.delete_project(id)).wrap_err("delete project")?;
    world.delete_outcomes.push(removed);
    Ok(())
}

#[when("the project is deleted")]
fn project_deleted(world: &mut ProjectWorld) -> Result<(), eyre::Report> {
    delete_created(world)
}

#[when("the project is deleted again")]
fn project_deleted_again(world: &mut ProjectWorld) -> Result<(), eyre::Report> {
    delete_created(world)
}
