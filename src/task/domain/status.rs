//! Task status and terminal result.

use super::ExtractionTaskError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task has been created but not executed.
    Created,
    /// The task is executing.
    Running,
    /// The task has stopped, successfully or not.
    Finished,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of a finished task.
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Every stage completed.
    Success,
    /// A stage failed; carries the first error raised.
    Failure(Arc<ExtractionTaskError>),
}

impl TaskResult {
    /// Wraps an error as a failed result.
    #[must_use]
    pub fn failure(error: ExtractionTaskError) -> Self {
        Self::Failure(Arc::new(error))
    }

    /// Returns `true` for [`TaskResult::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the error of a failed result.
    #[must_use]
    pub fn error(&self) -> Option<&ExtractionTaskError> {
        match self {
            Self::Success => None,
            Self::Failure(error) => Some(error.as_ref()),
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure(_) => "failure",
        }
    }
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Failure(error) => write!(f, "failure: {error}"),
        }
    }
}
