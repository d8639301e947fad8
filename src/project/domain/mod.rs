//! Domain model for mined projects and their examples.
//!
//! Projects, repositories, API elements and examples are plain values. The
//! persistence boundary lives in [`crate::project::ports`].

mod api;
mod error;
mod example;
mod ids;
mod project;
mod repository;

pub use api::{ApiClass, ApiElement, ApiElementKind};
pub use error::{ParseProjectStatusError, ParseRepositoryTypeError, ProjectDomainError};
pub use example::{ApiSignature, Example, ExampleOrigin};
pub use ids::{ExampleId, ProjectId, ProjectName};
pub use project::{Project, ProjectDescriptor, ProjectStatistics, ProjectStatus};
pub use repository::{Repository, RepositoryType};
