//! Runs the extraction stages for a task and records the outcome.

use crate::acquisition::domain::DownloaderSet;
use crate::acquisition::services::AcquisitionDispatcher;
use crate::build::services::BuildOrchestrator;
use crate::config::{MinerConfig, default_working_directory};
use crate::dedup::domain::CosineSimilarity;
use crate::dedup::services::DeduplicationEngine;
use crate::extraction::ports::{ExampleExtractor, ExtractionOutput, ExtractionRequest};
use crate::panic::panic_message;
use crate::project::domain::ProjectStatistics;
use crate::project::ports::ProjectRepository;
use crate::task::domain::{ExtractionTask, ExtractionTaskError, TaskResult, TaskStateError};
use camino::Utf8PathBuf;
use futures::FutureExt;
use mockable::Clock;
use std::collections::BTreeSet;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Executes extraction tasks against a project repository and extractor.
///
/// Stages run in order: duplicate check, source API lookup, acquisition,
/// builds, extraction, near-duplicate removal, persistence. The first failing
/// stage ends the run. Builder failures are not fatal.
#[derive(Clone)]
pub struct ExtractionPipeline<R, E, C>
where
    R: ProjectRepository,
    E: ExampleExtractor,
    C: Clock + Send + Sync,
{
    projects: Arc<R>,
    extractor: Arc<E>,
    clock: Arc<C>,
    dispatcher: AcquisitionDispatcher,
    builders: BuildOrchestrator,
    deduplication: DeduplicationEngine,
    working_directory: Utf8PathBuf,
}

impl<R, E, C> ExtractionPipeline<R, E, C>
where
    R: ProjectRepository,
    E: ExampleExtractor,
    C: Clock + Send + Sync,
{
    /// Creates a pipeline with the command-line downloaders, the default
    /// builders and the default similarity metric.
    #[must_use]
    pub fn new(projects: Arc<R>, extractor: Arc<E>, clock: Arc<C>) -> Self {
        Self {
            projects,
            extractor,
            clock,
            dispatcher: AcquisitionDispatcher::new(DownloaderSet::with_default_downloaders()),
            builders: BuildOrchestrator::with_default_builders(),
            deduplication: DeduplicationEngine::default(),
            working_directory: default_working_directory(),
        }
    }

    /// Creates a pipeline from runtime configuration.
    #[must_use]
    pub fn configured(
        config: &MinerConfig,
        projects: Arc<R>,
        extractor: Arc<E>,
        clock: Arc<C>,
    ) -> Self {
        let metric = CosineSimilarity::new(config.similarity.tokenization);
        Self {
            dispatcher: AcquisitionDispatcher::new(DownloaderSet::with_default_downloaders())
                .with_archive_extension(config.dependency_archive_extension.clone()),
            deduplication: DeduplicationEngine::new(Arc::new(metric)),
            working_directory: config.working_directory.clone(),
            ..Self::new(projects, extractor, clock)
        }
    }

    /// Returns the acquisition dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &AcquisitionDispatcher {
        &self.dispatcher
    }

    /// Replaces the downloaders, keeping the archive extension.
    #[must_use]
    pub fn with_downloaders(mut self, downloaders: DownloaderSet) -> Self {
        let extension = self.dispatcher.archive_extension().to_owned();
        self.dispatcher = AcquisitionDispatcher::new(downloaders).with_archive_extension(extension);
        self
    }

    /// Replaces the builder plugins.
    #[must_use]
    pub fn with_builders(mut self, builders: BuildOrchestrator) -> Self {
        self.builders = builders;
        self
    }

    /// Replaces the near-duplicate removal engine.
    #[must_use]
    pub fn with_deduplication(mut self, deduplication: DeduplicationEngine) -> Self {
        self.deduplication = deduplication;
        self
    }

    /// Sets the staging root handed to downloaders.
    #[must_use]
    pub fn with_working_directory(mut self, directory: impl Into<Utf8PathBuf>) -> Self {
        self.working_directory = directory.into();
        self
    }

    /// Runs `task` to completion and returns its result.
    ///
    /// Every run that starts ends with the task `Finished` and its result
    /// recorded, whether a stage fails, a stage panics or the returned future
    /// is dropped before completion. Stage failures are reported through the
    /// returned [`TaskResult`], not as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStateError::AlreadyStarted`] when the task has been
    /// executed before; the task is left untouched.
    pub async fn execute(&self, task: &mut ExtractionTask) -> Result<TaskResult, TaskStateError> {
        task.start(&*self.clock)?;
        let task_id = task.id();
        tracing::info!(%task_id, "starting {task}");

        let mut guard = CompletionGuard::new(task, &*self.clock);
        let outcome = AssertUnwindSafe(self.run_stages(guard.task_mut()))
            .catch_unwind()
            .await;
        let result = match outcome {
            Ok(Ok(())) => TaskResult::Success,
            Ok(Err(error)) => TaskResult::failure(error),
            Err(payload) => {
                TaskResult::failure(ExtractionTaskError::Unexpected(panic_message(&*payload)))
            }
        };

        match result.error() {
            None => tracing::info!(%task_id, "extraction succeeded"),
            Some(error) => tracing::warn!(
                %task_id,
                category = %error.category(),
                error = %error,
                "extraction failed"
            ),
        }

        guard.complete(result.clone())?;
        Ok(result)
    }

    async fn run_stages(&self, task: &mut ExtractionTask) -> Result<(), ExtractionTaskError> {
        let name = task.project().name().clone();
        if self.projects.find_by_name(&name).await?.is_some() {
            return Err(ExtractionTaskError::DuplicateProject(name));
        }

        let source_api = self
            .projects
            .find_source_api()
            .await?
            .ok_or(ExtractionTaskError::SourceApiMissing)?;
        let project = task.project_mut();
        project.set_client_of(source_api.id());

        let source_directory = self
            .dispatcher
            .acquire(&name, project.repository_mut(), &self.working_directory)
            .await?;

        let build_report = self.builders.run(&source_directory).await;
        tracing::debug!(
            project = %name,
            attempted = build_report.attempted(),
            succeeded = build_report.succeeded(),
            "builders finished"
        );

        let archives: BTreeSet<Utf8PathBuf> = source_api
            .repository()
            .dependency_archives()
            .iter()
            .chain(project.repository().dependency_archives())
            .cloned()
            .collect();
        let request = ExtractionRequest::new(source_directory, archives, source_api.id());
        tracing::debug!(
            project = %name,
            archives = request.dependency_archives().len(),
            "extracting code examples"
        );
        let ExtractionOutput {
            api_classes,
            examples,
            dependency_archives,
        } = self.extractor.extract(&request).await?;
        let extracted_examples = examples.len();
        tracing::debug!(
            project = %name,
            examples = extracted_examples,
            api_classes = api_classes.len(),
            "removing similar examples"
        );
        let retained = self.deduplication.reduce(examples);
        let statistics = ProjectStatistics {
            extracted_examples,
            retained_examples: retained.len(),
            api_classes: api_classes.len(),
            builders_attempted: build_report.attempted(),
            builders_succeeded: build_report.succeeded(),
        };
        project
            .repository_mut()
            .set_dependency_archives(dependency_archives);
        project.set_api_classes(api_classes);
        project.set_statistics(statistics);

        tracing::debug!(project = %name, retained = retained.len(), "persisting project");
        self.projects.persist(project, &retained).await?;
        Ok(())
    }
}

impl<R, E, C> std::fmt::Debug for ExtractionPipeline<R, E, C>
where
    R: ProjectRepository,
    E: ExampleExtractor,
    C: Clock + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionPipeline")
            .field("dispatcher", &self.dispatcher)
            .field("builders", &self.builders)
            .field("deduplication", &self.deduplication)
            .field("working_directory", &self.working_directory)
            .finish_non_exhaustive()
    }
}

/// Finishes a running task as interrupted unless completed explicitly.
struct CompletionGuard<'task, C: Clock> {
    task: &'task mut ExtractionTask,
    clock: &'task C,
    completed: bool,
}

impl<'task, C: Clock> CompletionGuard<'task, C> {
    const fn new(task: &'task mut ExtractionTask, clock: &'task C) -> Self {
        Self {
            task,
            clock,
            completed: false,
        }
    }

    const fn task_mut(&mut self) -> &mut ExtractionTask {
        self.task
    }

    fn complete(&mut self, result: TaskResult) -> Result<(), TaskStateError> {
        self.completed = true;
        self.task.finish(result, self.clock)
    }
}

impl<C: Clock> Drop for CompletionGuard<'_, C> {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        let interrupted = TaskResult::failure(ExtractionTaskError::Interrupted);
        match self.task.finish(interrupted, self.clock) {
            Ok(()) => tracing::warn!(task_id = %self.task.id(), "extraction interrupted"),
            Err(error) => {
                tracing::warn!(task_id = %self.task.id(), %error, "cannot finish interrupted task");
            }
        }
    }
}
