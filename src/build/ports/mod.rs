//! Port contracts for build tools.

pub mod builder;

pub use builder::{BuilderError, BuilderPlugin, BuilderResult};
