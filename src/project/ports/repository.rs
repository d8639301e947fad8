//! Repository port for project lookup and example persistence.

use crate::project::domain::{Example, Project, ProjectName};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Finds a persisted project by its unique name.
    ///
    /// Returns `None` when no project has that name.
    async fn find_by_name(&self, name: &ProjectName) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns the source API project whose usage examples are mined.
    ///
    /// Returns `None` when no source API has been registered.
    async fn find_source_api(&self) -> ProjectRepositoryResult<Option<Project>>;

    /// Persists a finished project together with its retained examples.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when a project
    /// with the same name has already been persisted.
    async fn persist(&self, project: &Project, examples: &[Example]) -> ProjectRepositoryResult<()>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same name already exists.
    #[error("duplicate project: {0}")]
    DuplicateProject(ProjectName),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
