//! Adapter implementations of the downloader port.

pub mod command;
pub mod memory;

pub use command::{CommandDownloader, staging_directory};
pub use memory::StaticDownloader;
