//! Domain model for source acquisition.

mod downloaders;

pub use downloaders::DownloaderSet;
