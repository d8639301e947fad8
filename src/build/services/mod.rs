//! Application services for build orchestration.

mod orchestrator;

pub use orchestrator::{BuildOrchestrator, BuildOutcome, BuildReport, BuildStatus};
