//! Builder plugin port.

use async_trait::async_trait;
use camino::Utf8Path;
use std::sync::Arc;
use thiserror::Error;

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;

/// A build tool that can compile a source tree in place.
///
/// Plugins must be independent of each other and safe to run repeatedly on
/// the same tree.
#[async_trait]
pub trait BuilderPlugin: Send + Sync {
    /// Human-readable builder name used in logs and reports.
    fn name(&self) -> &str;

    /// Builds the tree rooted at `source_directory`.
    ///
    /// Returns `Ok(false)` when the builder does not apply to the tree or the
    /// build did not succeed.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError`] when the build tool cannot be run.
    async fn build(&self, source_directory: &Utf8Path) -> BuilderResult<bool>;
}

/// Errors returned by builder plugins.
#[derive(Debug, Clone, Error)]
pub enum BuilderError {
    /// The build tool could not be launched.
    #[error("cannot launch {program}: {source}")]
    Launch {
        /// Program that was launched.
        program: String,
        /// Launch failure.
        #[source]
        source: Arc<std::io::Error>,
    },

    /// Any other builder failure.
    #[error("builder error: {0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl BuilderError {
    /// Wraps an arbitrary builder failure.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }
}
