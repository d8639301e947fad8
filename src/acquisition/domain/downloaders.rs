//! Registry of downloaders keyed by remote repository type.

use crate::acquisition::adapters::CommandDownloader;
use crate::acquisition::ports::Downloader;
use crate::project::domain::RepositoryType;
use std::fmt;
use std::sync::Arc;

/// One optional downloader per remote repository type.
///
/// [`RepositoryType::Local`] never needs a downloader.
#[derive(Clone, Default)]
pub struct DownloaderSet {
    compressed: Option<Arc<dyn Downloader>>,
    git: Option<Arc<dyn Downloader>>,
    mercurial: Option<Arc<dyn Downloader>>,
    subversion: Option<Arc<dyn Downloader>>,
}

impl DownloaderSet {
    /// Creates an empty set; only local repositories can be acquired.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set with the git, hg and svn command-line downloaders.
    ///
    /// Compressed archives stay unsupported until a downloader is
    /// registered with [`DownloaderSet::with_compressed`].
    #[must_use]
    pub fn with_default_downloaders() -> Self {
        Self::new()
            .with_git(Arc::new(CommandDownloader::git()))
            .with_mercurial(Arc::new(CommandDownloader::mercurial()))
            .with_subversion(Arc::new(CommandDownloader::subversion()))
    }

    /// Registers the downloader for compressed archives.
    #[must_use]
    pub fn with_compressed(mut self, downloader: Arc<dyn Downloader>) -> Self {
        self.compressed = Some(downloader);
        self
    }

    /// Registers the downloader for Git repositories.
    #[must_use]
    pub fn with_git(mut self, downloader: Arc<dyn Downloader>) -> Self {
        self.git = Some(downloader);
        self
    }

    /// Registers the downloader for Mercurial repositories.
    #[must_use]
    pub fn with_mercurial(mut self, downloader: Arc<dyn Downloader>) -> Self {
        self.mercurial = Some(downloader);
        self
    }

    /// Registers the downloader for Subversion repositories.
    #[must_use]
    pub fn with_subversion(mut self, downloader: Arc<dyn Downloader>) -> Self {
        self.subversion = Some(downloader);
        self
    }

    /// Returns the downloader registered for a remote repository type.
    ///
    /// Always returns `None` for [`RepositoryType::Local`].
    #[must_use]
    pub fn get(&self, repository_type: RepositoryType) -> Option<&Arc<dyn Downloader>> {
        match repository_type {
            RepositoryType::Compressed => self.compressed.as_ref(),
            RepositoryType::Git => self.git.as_ref(),
            RepositoryType::Mercurial => self.mercurial.as_ref(),
            RepositoryType::Subversion => self.subversion.as_ref(),
            RepositoryType::Local => None,
        }
    }
}

impl fmt::Debug for DownloaderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloaderSet")
            .field("compressed", &self.compressed.is_some())
            .field("git", &self.git.is_some())
            .field("mercurial", &self.mercurial.is_some())
            .field("subversion", &self.subversion.is_some())
            .finish()
    }
}
