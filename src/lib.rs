//! apiminer: API usage example mining pipeline.
//!
//! This crate ingests a client project's source repository, extracts usage
//! examples of a source API, removes near-duplicate examples and persists the
//! result.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (command line tools,
//!   in-memory stores)
//!
//! # Modules
//!
//! - [`project`]: Projects, repositories, API elements and examples
//! - [`acquisition`]: Fetching source trees by repository type
//! - [`build`]: Best-effort builds over an open set of builder plugins
//! - [`extraction`]: The example extractor boundary
//! - [`dedup`]: Near-duplicate example removal
//! - [`task`]: Extraction task lifecycle and stage pipeline
//! - [`config`]: Runtime configuration
//! - [`telemetry`]: Tracing subscriber set-up

pub mod acquisition;
pub mod build;
pub mod config;
pub mod dedup;
pub mod extraction;
pub mod panic;
pub mod project;
pub mod task;
pub mod telemetry;
