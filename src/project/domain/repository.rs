//! Acquisition descriptor for a project's source repository.

use super::{ParseRepositoryTypeError, ProjectDomainError};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of repository a project's sources are acquired from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryType {
    /// A downloadable compressed archive.
    Compressed,
    /// A Git repository.
    Git,
    /// A directory already present on the local filesystem.
    Local,
    /// A Mercurial repository.
    Mercurial,
    /// A Subversion repository.
    Subversion,
}

impl RepositoryType {
    /// All repository types in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Compressed,
        Self::Git,
        Self::Local,
        Self::Mercurial,
        Self::Subversion,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compressed => "compressed",
            Self::Git => "git",
            Self::Local => "local",
            Self::Mercurial => "mercurial",
            Self::Subversion => "subversion",
        }
    }
}

impl TryFrom<&str> for RepositoryType {
    type Error = ParseRepositoryTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "compressed" => Ok(Self::Compressed),
            "git" => Ok(Self::Git),
            "local" => Ok(Self::Local),
            "mercurial" | "hg" => Ok(Self::Mercurial),
            "subversion" | "svn" => Ok(Self::Subversion),
            _ => Err(ParseRepositoryTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for RepositoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repository descriptor attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    repository_type: RepositoryType,
    location: String,
    source_directory: Option<Utf8PathBuf>,
    dependency_archives: BTreeSet<Utf8PathBuf>,
}

impl Repository {
    /// Creates a repository descriptor that has not been acquired yet.
    ///
    /// `location` is a remote URL, or a filesystem path for
    /// [`RepositoryType::Local`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyRepositoryLocation`] when the
    /// location is blank.
    pub fn new(
        repository_type: RepositoryType,
        location: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let raw = location.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyRepositoryLocation);
        }
        Ok(Self {
            repository_type,
            location: trimmed.to_owned(),
            source_directory: None,
            dependency_archives: BTreeSet::new(),
        })
    }

    /// Returns the repository type.
    #[must_use]
    pub const fn repository_type(&self) -> RepositoryType {
        self.repository_type
    }

    /// Returns the remote URL or local path.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the local source directory once acquisition has completed.
    #[must_use]
    pub fn source_directory(&self) -> Option<&Utf8Path> {
        self.source_directory.as_deref()
    }

    /// Returns the dependency archives known for this repository.
    #[must_use]
    pub const fn dependency_archives(&self) -> &BTreeSet<Utf8PathBuf> {
        &self.dependency_archives
    }

    /// Records the resolved local source directory.
    pub fn set_source_directory(&mut self, directory: impl Into<Utf8PathBuf>) {
        self.source_directory = Some(directory.into());
    }

    /// Replaces the known dependency archives.
    pub fn set_dependency_archives(&mut self, archives: impl IntoIterator<Item = Utf8PathBuf>) {
        self.dependency_archives = archives.into_iter().collect();
    }
}
