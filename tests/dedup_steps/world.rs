//! Shared world state for example deduplication BDD scenarios.

use apiminer::dedup::services::DeduplicationEngine;
use apiminer::project::domain::Example;
use rstest::fixture;

/// Scenario world for deduplication behaviour tests.
#[derive(Default)]
pub struct DedupWorld {
    pub engine: DeduplicationEngine,
    pub examples: Vec<Example>,
    pub reduced: Option<Vec<Example>>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DedupWorld {
    DedupWorld::default()
}
