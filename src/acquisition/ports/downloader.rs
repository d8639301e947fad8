//! Downloader port used to fetch remote repositories.

use crate::project::domain::ProjectName;
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Result type for downloader operations.
pub type DownloaderResult<T> = Result<T, DownloaderError>;

/// Parameters for fetching one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    project_name: ProjectName,
    remote_url: String,
    working_directory: Utf8PathBuf,
}

impl DownloadRequest {
    /// Creates a download request.
    #[must_use]
    pub fn new(
        project_name: ProjectName,
        remote_url: impl Into<String>,
        working_directory: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            project_name,
            remote_url: remote_url.into(),
            working_directory: working_directory.into(),
        }
    }

    /// Returns the name of the project being staged.
    #[must_use]
    pub const fn project_name(&self) -> &ProjectName {
        &self.project_name
    }

    /// Returns the remote repository URL.
    #[must_use]
    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    /// Returns the staging root sources are fetched under.
    #[must_use]
    pub fn working_directory(&self) -> &Utf8Path {
        &self.working_directory
    }
}

/// Fetches a remote repository into a local directory.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Fetches the repository and returns the local directory holding its
    /// source tree.
    ///
    /// # Errors
    ///
    /// Returns [`DownloaderError`] when the sources cannot be fetched.
    async fn download(&self, request: &DownloadRequest) -> DownloaderResult<Utf8PathBuf>;
}

/// Errors returned by downloader implementations.
#[derive(Debug, Clone, Error)]
pub enum DownloaderError {
    /// The staging directory for the project already holds files.
    #[error("download target is not empty: {0}")]
    TargetNotEmpty(Utf8PathBuf),

    /// The external fetch command exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        /// Program that was run.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// Transport or I/O failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DownloaderError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
