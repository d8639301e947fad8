//! Then steps for extraction task BDD scenarios.

use super::world::{ExtractionWorld, run_async};
use apiminer::project::{domain::ProjectName, ports::ProjectRepository};
use apiminer::task::domain::{ExtractionTask, TaskResult, TaskStateError, TaskStatus};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn finished_task(world: &ExtractionWorld) -> Result<&ExtractionTask, eyre::Report> {
    let task = world
        .task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    if task.status() != TaskStatus::Finished {
        return Err(eyre::eyre!("expected finished task, found {}", task.status()));
    }
    Ok(task)
}

#[then(r#"the task is finished with a "{category}" failure"#)]
fn finished_with_failure(world: &ExtractionWorld, category: String) -> Result<(), eyre::Report> {
    let task = finished_task(world)?;
    let error = task
        .result()
        .and_then(TaskResult::error)
        .ok_or_else(|| eyre::eyre!("expected a failure result, found {:?}", task.result()))?;
    if error.category().as_str() != category {
        return Err(eyre::eyre!(
            "expected {category} failure, found {} ({error})",
            error.category()
        ));
    }
    Ok(())
}

#[then("the task is finished successfully")]
fn finished_successfully(world: &ExtractionWorld) -> Result<(), eyre::Report> {
    let task = finished_task(world)?;
    if !task.result().is_some_and(TaskResult::is_success) {
        return Err(eyre::eyre!("expected success, found {:?}", task.result()));
    }
    Ok(())
}

#[then("the downloader was not called")]
fn downloader_not_called(world: &ExtractionWorld) -> Result<(), eyre::Report> {
    let requests = world.downloader.requests().wrap_err("read downloader requests")?;
    if !requests.is_empty() {
        return Err(eyre::eyre!(
            "expected no download, found {} requests",
            requests.len()
        ));
    }
    Ok(())
}

#[then(r#"project "{name}" is not persisted"#)]
fn project_not_persisted(world: &ExtractionWorld, name: String) -> Result<(), eyre::Report> {
    let project_name = ProjectName::new(name).wrap_err("project name")?;
    let found = run_async(world.projects.find_by_name(&project_name)).wrap_err("project lookup")?;
    if found.is_some() {
        return Err(eyre::eyre!("project {project_name} should not be persisted"));
    }
    Ok(())
}

#[then(r#"project "{name}" is persisted with {count:usize} examples"#)]
fn project_persisted_with(
    world: &ExtractionWorld,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let project_name = ProjectName::new(name).wrap_err("project name")?;
    let found = run_async(world.projects.find_by_name(&project_name)).wrap_err("project lookup")?;
    if found.is_none() {
        return Err(eyre::eyre!("project {project_name} was not persisted"));
    }
    let examples = world
        .projects
        .examples_for(&project_name)
        .wrap_err("examples lookup")?;
    if examples.len() != count {
        return Err(eyre::eyre!(
            "expected {count} examples, found {}",
            examples.len()
        ));
    }
    Ok(())
}

#[then("the second execution is rejected as already started")]
fn second_execution_rejected(world: &ExtractionWorld) -> Result<(), eyre::Report> {
    let task = finished_task(world)?;
    match world.last_result.as_ref() {
        Some(Err(TaskStateError::AlreadyStarted(id))) if *id == task.id() => Ok(()),
        other => Err(eyre::eyre!("expected AlreadyStarted, found {other:?}")),
    }
}
