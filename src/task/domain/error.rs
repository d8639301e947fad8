//! Error types raised while running extraction tasks.

use super::TaskId;
use crate::acquisition::services::AcquisitionError;
use crate::extraction::ports::ExtractorError;
use crate::project::domain::ProjectName;
use crate::project::ports::ProjectRepositoryError;
use std::fmt;
use thiserror::Error;

/// Invalid lifecycle transition requested on a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStateError {
    /// The task has already been started; tasks run at most once.
    #[error("task {0} has already been started")]
    AlreadyStarted(TaskId),

    /// The task cannot finish because it is not running.
    #[error("task {0} is not running")]
    NotRunning(TaskId),
}

/// Broad class of an extraction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCategory {
    /// A precondition checked before any expensive work failed.
    Precondition,
    /// The sources could not be acquired.
    Acquisition,
    /// The extractor failed.
    Extraction,
    /// Looking up or persisting the project failed.
    Persistence,
    /// A panic or interruption ended the run.
    Unexpected,
}

impl FailureCategory {
    /// Returns the lowercase name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Precondition => "precondition",
            Self::Acquisition => "acquisition",
            Self::Extraction => "extraction",
            Self::Persistence => "persistence",
            Self::Unexpected => "unexpected",
        }
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First error that ended an extraction run.
#[derive(Debug, Error)]
pub enum ExtractionTaskError {
    /// A project with the same name is already registered.
    #[error("project already registered: {0}")]
    DuplicateProject(ProjectName),

    /// No source API project is registered to mine examples for.
    #[error("no source API project is registered")]
    SourceApiMissing,

    /// Source acquisition failed.
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    /// Example extraction failed.
    #[error(transparent)]
    Extraction(#[from] ExtractorError),

    /// Project lookup or persistence failed.
    #[error(transparent)]
    Persistence(#[from] ProjectRepositoryError),

    /// A stage panicked.
    #[error("unexpected failure: {0}")]
    Unexpected(String),

    /// The run was dropped before it completed.
    #[error("task was interrupted before completion")]
    Interrupted,
}

impl ExtractionTaskError {
    /// Returns the failure category of this error.
    #[must_use]
    pub const fn category(&self) -> FailureCategory {
        match self {
            Self::DuplicateProject(_) | Self::SourceApiMissing => FailureCategory::Precondition,
            Self::Acquisition(_) => FailureCategory::Acquisition,
            Self::Extraction(_) => FailureCategory::Extraction,
            Self::Persistence(_) => FailureCategory::Persistence,
            Self::Unexpected(_) | Self::Interrupted => FailureCategory::Unexpected,
        }
    }
}
