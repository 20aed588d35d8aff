//! Given steps for project management BDD scenarios.

use super::world::{ProjectWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::project::services::ProjectRequest;

#[given(r#"a stored project {id:i32} named "{name}" described as "{description}""#)]
fn stored_project(
    world: &mut ProjectWorld,
    id: i32,
    name: String,
    description: String,
) -> Result<(), eyre::Report> {
    world.seed(id, name, description)
}

#[given(r#"a created project named "{name}""#)]
fn created_project(world: &mut ProjectWorld, name: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.add_project(ProjectRequest::new(name)))
        .wrap_err("create project for scenario")?;
    world.last_created = Some(created);
    Ok(())
}
