//! Extraction task aggregate root.

use super::{TaskId, TaskResult, TaskStateError, TaskStatus};
use crate::project::domain::{
    Project, ProjectDescriptor, ProjectDomainError, ProjectName, ProjectStatus, Repository,
    RepositoryType,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// Request payload describing the project an extraction task mines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExtractionTask {
    name: String,
    summary: String,
    site_url: String,
    project_status: ProjectStatus,
    repository_type: RepositoryType,
    repository_location: String,
    requested_by: Option<String>,
}

impl NewExtractionTask {
    /// Creates a request with the required project and repository fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        repository_type: RepositoryType,
        repository_location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            summary: String::new(),
            site_url: String::new(),
            project_status: ProjectStatus::Active,
            repository_type,
            repository_location: repository_location.into(),
            requested_by: None,
        }
    }

    /// Sets the project summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the project website.
    #[must_use]
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    /// Sets the project status tag.
    #[must_use]
    pub const fn with_project_status(mut self, status: ProjectStatus) -> Self {
        self.project_status = status;
        self
    }

    /// Records who requested the task.
    #[must_use]
    pub fn with_requested_by(mut self, owner: impl Into<String>) -> Self {
        self.requested_by = Some(owner.into());
        self
    }
}

/// A single run of the example mining pipeline for one project.
///
/// Status moves `Created -> Running -> Finished` exactly once and the result
/// is written once, when the task finishes.
#[derive(Debug, Clone)]
pub struct ExtractionTask {
    id: TaskId,
    project: Project,
    requested_by: Option<String>,
    status: TaskStatus,
    result: Option<TaskResult>,
    created_at: DateTime<Utc>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl ExtractionTask {
    /// Creates a task and the project it will mine.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError`] when the project name or repository
    /// location is blank.
    pub fn new(request: NewExtractionTask, clock: &impl Clock) -> Result<Self, ProjectDomainError> {
        let descriptor = ProjectDescriptor {
            name: ProjectName::new(request.name)?,
            summary: request.summary,
            site_url: request.site_url,
            status: request.project_status,
            repository: Repository::new(request.repository_type, request.repository_location)?,
        };
        let project = Project::new(descriptor, clock);
        Ok(Self {
            id: TaskId::new(),
            created_at: project.added_at(),
            project,
            requested_by: request.requested_by,
            status: TaskStatus::Created,
            result: None,
            started_at: None,
            finished_at: None,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the project being mined.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the project being mined for in-place updates.
    pub const fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    /// Returns who requested the task, if recorded.
    #[must_use]
    pub fn requested_by(&self) -> Option<&str> {
        self.requested_by.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the terminal result once the task has finished.
    #[must_use]
    pub const fn result(&self) -> Option<&TaskResult> {
        self.result.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when execution started.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Returns when execution finished.
    #[must_use]
    pub const fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Returns a human-readable description of the task.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Moves the task from `Created` to `Running`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStateError::AlreadyStarted`] unless the task is in the
    /// `Created` state.
    pub fn start(&mut self, clock: &impl Clock) -> Result<(), TaskStateError> {
        if self.status != TaskStatus::Created {
            return Err(TaskStateError::AlreadyStarted(self.id));
        }
        self.status = TaskStatus::Running;
        self.started_at = Some(clock.utc());
        Ok(())
    }

    /// Moves the task from `Running` to `Finished` and records its result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStateError::NotRunning`] unless the task is in the
    /// `Running` state.
    pub fn finish(&mut self, result: TaskResult, clock: &impl Clock) -> Result<(), TaskStateError> {
        if self.status != TaskStatus::Running {
            return Err(TaskStateError::NotRunning(self.id));
        }
        if self.result.is_none() {
            self.result = Some(result);
        }
        self.status = TaskStatus::Finished;
        self.finished_at = Some(clock.utc());
        Ok(())
    }
}

impl fmt::Display for ExtractionTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "extraction of examples for project `{}`", self.project.name())
    }
}
