//! In-memory project repository for tests and local mining runs.

use crate::project::{
    domain::{Example, Project, ProjectId, ProjectName},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory project repository.
///
/// Persisting is atomic per project name: of several concurrent persists for
/// the same name, exactly one succeeds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    projects: HashMap<ProjectName, Project>,
    examples: HashMap<ProjectId, Vec<Example>>,
    source_api: Option<ProjectName>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `project` and marks it as the source API whose examples are
    /// mined.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the name is
    /// taken, or a persistence error when lock acquisition fails.
    pub fn register_source_api(&self, project: Project) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.projects.contains_key(project.name()) {
            return Err(ProjectRepositoryError::DuplicateProject(
                project.name().clone(),
            ));
        }
        state.source_api = Some(project.name().clone());
        state.projects.insert(project.name().clone(), project);
        Ok(())
    }

    /// Returns the examples persisted for the named project.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when lock acquisition fails.
    pub fn examples_for(&self, name: &ProjectName) -> ProjectRepositoryResult<Vec<Example>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .projects
            .get(name)
            .and_then(|project| state.examples.get(&project.id()))
            .cloned()
            .unwrap_or_default())
    }

    /// Returns the number of persisted projects, source API included.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when lock acquisition fails.
    pub fn project_count(&self) -> ProjectRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.projects.len())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn find_by_name(&self, name: &ProjectName) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.projects.get(name).cloned())
    }

    async fn find_source_api(&self) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .source_api
            .as_ref()
            .and_then(|name| state.projects.get(name))
            .cloned())
    }

    async fn persist(&self, project: &Project, examples: &[Example]) -> ProjectRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.projects.contains_key(project.name()) {
            return Err(ProjectRepositoryError::DuplicateProject(
                project.name().clone(),
            ));
        }

        state.examples.insert(project.id(), examples.to_vec());
        state
            .projects
            .insert(project.name().clone(), project.clone());
        Ok(())
    }
}
