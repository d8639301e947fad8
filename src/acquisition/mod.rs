//! Source acquisition from heterogeneous repository kinds.
//!
//! The [`services::AcquisitionDispatcher`] maps a repository type to a
//! downloader, resolves the local source tree and records the dependency
//! archives found in it.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
