//! In-memory downloader for tests and pre-staged source trees.

use crate::acquisition::ports::{DownloadRequest, Downloader, DownloaderError, DownloaderResult};
use async_trait::async_trait;
use camino::Utf8PathBuf;
use std::sync::{Arc, RwLock};

/// Downloader returning a fixed outcome and recording every request.
#[derive(Debug, Clone)]
pub struct StaticDownloader {
    outcome: Result<Utf8PathBuf, String>,
    requests: Arc<RwLock<Vec<DownloadRequest>>>,
}

impl StaticDownloader {
    /// Creates a downloader that always resolves to `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            outcome: Ok(path.into()),
            requests: Arc::default(),
        }
    }

    /// Creates a downloader that always fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            requests: Arc::default(),
        }
    }

    /// Returns the requests received so far.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn requests(&self) -> DownloaderResult<Vec<DownloadRequest>> {
        let requests = self.requests.read().map_err(|err| {
            DownloaderError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(requests.clone())
    }
}

#[async_trait]
impl Downloader for StaticDownloader {
    async fn download(&self, request: &DownloadRequest) -> DownloaderResult<Utf8PathBuf> {
        self.requests
            .write()
            .map_err(|err| DownloaderError::transport(std::io::Error::other(err.to_string())))?
            .push(request.clone());
        self.outcome
            .clone()
            .map_err(|message| DownloaderError::transport(std::io::Error::other(message)))
    }
}
