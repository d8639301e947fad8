//! Dispatches repository acquisition to the downloader for its type.

use crate::acquisition::{
    domain::DownloaderSet,
    ports::{DownloadRequest, DownloaderError},
    services::collect_dependency_archives,
};
use crate::project::domain::{ProjectName, Repository, RepositoryType};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Extension of the dependency archives scanned by default.
pub const DEFAULT_ARCHIVE_EXTENSION: &str = ".jar";

/// Errors raised while acquiring a repository's sources.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// No downloader is registered for the repository type.
    #[error("unsupported repository type: {0}")]
    UnsupportedRepositoryType(RepositoryType),

    /// The downloader failed to fetch the sources.
    #[error("failed to download {repository_type} repository")]
    Download {
        /// Repository type that was being fetched.
        repository_type: RepositoryType,
        /// Downloader failure.
        #[source]
        source: DownloaderError,
    },

    /// The source location could not be resolved to an absolute UTF-8 path.
    #[error("cannot resolve source directory {path}")]
    ResolvePath {
        /// Path as given.
        path: String,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The source tree could not be scanned for dependency archives.
    #[error("cannot scan {path} for dependency archives")]
    ArchiveScan {
        /// Directory being scanned.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for acquisition operations.
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

/// Resolves a repository to a local source tree.
#[derive(Debug, Clone)]
pub struct AcquisitionDispatcher {
    downloaders: DownloaderSet,
    archive_extension: String,
}

impl AcquisitionDispatcher {
    /// Creates a dispatcher scanning for [`DEFAULT_ARCHIVE_EXTENSION`] files.
    #[must_use]
    pub fn new(downloaders: DownloaderSet) -> Self {
        Self {
            downloaders,
            archive_extension: DEFAULT_ARCHIVE_EXTENSION.to_owned(),
        }
    }

    /// Sets the extension of dependency archives to scan for.
    #[must_use]
    pub fn with_archive_extension(mut self, extension: impl Into<String>) -> Self {
        self.archive_extension = extension.into();
        self
    }

    /// Returns the extension of scanned dependency archives.
    #[must_use]
    pub fn archive_extension(&self) -> &str {
        &self.archive_extension
    }

    /// Returns the registered downloaders.
    #[must_use]
    pub const fn downloaders(&self) -> &DownloaderSet {
        &self.downloaders
    }

    /// Acquires the repository's sources and records the resulting source
    /// directory and dependency archives on `repository`.
    ///
    /// Local repositories are used in place; every other type is fetched
    /// under `working_directory` by its registered downloader.
    ///
    /// # Errors
    ///
    /// Returns [`AcquisitionError::UnsupportedRepositoryType`] when no
    /// downloader is registered for the type, or the downloader, path
    /// resolution or archive scan failure.
    pub async fn acquire(
        &self,
        project_name: &ProjectName,
        repository: &mut Repository,
        working_directory: &Utf8Path,
    ) -> AcquisitionResult<Utf8PathBuf> {
        let repository_type = repository.repository_type();
        let fetched = match repository_type {
            RepositoryType::Local => Utf8PathBuf::from(repository.location()),
            RepositoryType::Compressed
            | RepositoryType::Git
            | RepositoryType::Mercurial
            | RepositoryType::Subversion => {
                let downloader = self
                    .downloaders
                    .get(repository_type)
                    .ok_or(AcquisitionError::UnsupportedRepositoryType(repository_type))?;
                let request = DownloadRequest::new(
                    project_name.clone(),
                    repository.location(),
                    working_directory,
                );
                tracing::debug!(
                    project = %project_name,
                    repository_type = %repository_type,
                    url = repository.location(),
                    "downloading source files from repository"
                );
                downloader
                    .download(&request)
                    .await
                    .map_err(|source| AcquisitionError::Download {
                        repository_type,
                        source,
                    })?
            }
        };

        let source_directory = absolute(&fetched)?;
        let archives = collect_dependency_archives(&source_directory, &self.archive_extension)
            .map_err(|source| AcquisitionError::ArchiveScan {
                path: source_directory.clone(),
                source,
            })?;
        tracing::debug!(
            project = %project_name,
            source_directory = %source_directory,
            archives = archives.len(),
            "acquired source tree"
        );

        repository.set_source_directory(source_directory.clone());
        repository.set_dependency_archives(archives);
        Ok(source_directory)
    }
}

fn absolute(path: &Utf8Path) -> AcquisitionResult<Utf8PathBuf> {
    let resolve_error = |source| AcquisitionError::ResolvePath {
        path: path.to_string(),
        source,
    };
    let resolved = std::path::absolute(path).map_err(resolve_error)?;
    Utf8PathBuf::from_path_buf(resolved).map_err(|non_utf8| {
        resolve_error(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("non UTF-8 path: {}", non_utf8.display()),
        ))
    })
}
