//! When steps for extraction task BDD scenarios.

use super::world::{ExtractionWorld, run_async};
use apiminer::acquisition::domain::DownloaderSet;
use apiminer::build::services::BuildOrchestrator;
use apiminer::project::domain::RepositoryType;
use apiminer::task::{
    domain::{ExtractionTask, NewExtractionTask},
    services::ExtractionPipeline,
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use std::sync::Arc;

fn execute(world: &mut ExtractionWorld) -> Result<(), eyre::Report> {
    let pipeline = ExtractionPipeline::new(
        Arc::clone(&world.projects),
        Arc::new(world.extractor.clone()),
        Arc::new(DefaultClock),
    )
    .with_downloaders(DownloaderSet::new().with_git(Arc::new(world.downloader.clone())))
    .with_builders(BuildOrchestrator::new());
    let task = world
        .task
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    world.last_result = Some(run_async(pipeline.execute(task)));
    Ok(())
}

#[when(r#"an extraction task for {kind} project "{name}" is executed"#)]
fn task_is_executed(
    world: &mut ExtractionWorld,
    kind: String,
    name: String,
) -> Result<(), eyre::Report> {
    let (repository_type, location) = match kind.as_str() {
        "git" => (RepositoryType::Git, "https://example.org/project.git".to_owned()),
        "local" => (
            RepositoryType::Local,
            world.source_tree.path().to_string_lossy().into_owned(),
        ),
        other => return Err(eyre::eyre!("unknown repository kind {other}")),
    };
    let request = NewExtractionTask::new(name, repository_type, location);
    world.task = Some(ExtractionTask::new(request, &DefaultClock).wrap_err("create task")?);
    execute(world)
}

#[when("the same task is executed again")]
fn task_is_executed_again(world: &mut ExtractionWorld) -> Result<(), eyre::Report> {
    execute(world)
}
