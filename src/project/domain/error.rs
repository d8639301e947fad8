//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing project domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The repository URL or local path is empty after trimming.
    #[error("repository location must not be empty")]
    EmptyRepositoryLocation,

    /// The API class name is empty after trimming.
    #[error("API class name must not be empty")]
    EmptyApiClassName,
}

/// Error returned while parsing repository types from configuration or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown repository type: {0}")]
pub struct ParseRepositoryTypeError(pub String);

/// Error returned while parsing project statuses from configuration or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
