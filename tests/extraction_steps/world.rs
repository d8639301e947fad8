//! Shared world state for extraction task BDD scenarios.

use apiminer::acquisition::adapters::memory::StaticDownloader;
use apiminer::extraction::{
    adapters::memory::StaticExtractor,
    ports::{ExampleExtractor, ExtractionOutput, ExtractionRequest, ExtractorResult},
};
use apiminer::project::adapters::memory::InMemoryProjectRepository;
use apiminer::task::domain::{ExtractionTask, TaskResult, TaskStateError};
use async_trait::async_trait;
use rstest::fixture;
use std::sync::Arc;
use tempfile::TempDir;

/// Extractor behaviour chosen by a scenario.
#[derive(Debug, Clone)]
pub enum ScenarioExtractor {
    /// Returns a prepared output.
    Static(StaticExtractor),
    /// Panics on every request.
    Panicking,
}

#[async_trait]
impl ExampleExtractor for ScenarioExtractor {
    async fn extract(&self, request: &ExtractionRequest) -> ExtractorResult<ExtractionOutput> {
        match self {
            Self::Static(extractor) => extractor.extract(request).await,
            Self::Panicking => panic!("extractor crashed"),
        }
    }
}

/// Scenario world for extraction task behaviour tests.
pub struct ExtractionWorld {
    pub projects: Arc<InMemoryProjectRepository>,
    pub downloader: StaticDownloader,
    pub extractor: ScenarioExtractor,
    pub source_tree: TempDir,
    pub task: Option<ExtractionTask>,
    pub last_result: Option<Result<TaskResult, TaskStateError>>,
}

impl ExtractionWorld {
    /// Creates a world with an empty repository and an empty source tree.
    #[must_use]
    pub fn new() -> Self {
        let source_tree = TempDir::new().expect("temporary source tree");
        Self {
            projects: Arc::new(InMemoryProjectRepository::new()),
            downloader: StaticDownloader::new(
                camino::Utf8Path::from_path(source_tree.path()).expect("UTF-8 path"),
            ),
            extractor: ScenarioExtractor::Static(StaticExtractor::new(
                ExtractionOutput::default(),
            )),
            source_tree,
            task: None,
            last_result: None,
        }
    }
}

impl Default for ExtractionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ExtractionWorld {
    ExtractionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
