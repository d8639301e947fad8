//! Port contracts for source acquisition.

pub mod downloader;

pub use downloader::{DownloadRequest, Downloader, DownloaderError, DownloaderResult};
