//! Downloaders that shell out to version-control command-line clients.

use crate::acquisition::ports::{DownloadRequest, Downloader, DownloaderError, DownloaderResult};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use tokio::process::Command;

/// Fetches a repository by running `<program> <args...> <url> <target>`.
///
/// The target is `<working directory>/<project name>`, with characters
/// outside `[A-Za-z0-9._-]` replaced by `_`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDownloader {
    program: String,
    args: Vec<String>,
}

impl CommandDownloader {
    /// Creates a downloader running `program` with leading `args`.
    #[must_use]
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().collect(),
        }
    }

    /// `git clone --quiet`.
    #[must_use]
    pub fn git() -> Self {
        Self::new("git", ["clone".to_owned(), "--quiet".to_owned()])
    }

    /// `hg clone --quiet`.
    #[must_use]
    pub fn mercurial() -> Self {
        Self::new("hg", ["clone".to_owned(), "--quiet".to_owned()])
    }

    /// `svn checkout --quiet`.
    #[must_use]
    pub fn subversion() -> Self {
        Self::new("svn", ["checkout".to_owned(), "--quiet".to_owned()])
    }

    /// Returns the program this downloader runs.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

/// Returns the staging directory used for a project.
#[must_use]
pub fn staging_directory(working_directory: &Utf8Path, project_name: &str) -> Utf8PathBuf {
    let sanitized: String = project_name
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    working_directory.join(sanitized)
}

async fn ensure_empty_target(target: &Utf8Path) -> DownloaderResult<()> {
    match tokio::fs::read_dir(target).await {
        Ok(mut entries) => {
            if entries
                .next_entry()
                .await
                .map_err(DownloaderError::transport)?
                .is_some()
            {
                return Err(DownloaderError::TargetNotEmpty(target.to_owned()));
            }
            Ok(())
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(DownloaderError::transport(err)),
    }
}

#[async_trait]
impl Downloader for CommandDownloader {
    async fn download(&self, request: &DownloadRequest) -> DownloaderResult<Utf8PathBuf> {
        let target = staging_directory(
            request.working_directory(),
            request.project_name().as_str(),
        );
        ensure_empty_target(&target).await?;
        tokio::fs::create_dir_all(request.working_directory())
            .await
            .map_err(DownloaderError::transport)?;

        tracing::debug!(
            program = %self.program,
            url = request.remote_url(),
            target = %target,
            "fetching repository"
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(request.remote_url())
            .arg(target.as_str())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(DownloaderError::transport)?;

        if !output.status.success() {
            return Err(DownloaderError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }
        Ok(target)
    }
}
