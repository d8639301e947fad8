//! Extractor port producing API classes and raw examples from a source tree.

use crate::project::domain::{ApiClass, Example, ProjectId};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for extractor operations.
pub type ExtractorResult<T> = Result<T, ExtractorError>;

/// Input handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    source_directory: Utf8PathBuf,
    dependency_archives: BTreeSet<Utf8PathBuf>,
    api_project: ProjectId,
}

impl ExtractionRequest {
    /// Creates an extraction request.
    #[must_use]
    pub fn new(
        source_directory: impl Into<Utf8PathBuf>,
        dependency_archives: impl IntoIterator<Item = Utf8PathBuf>,
        api_project: ProjectId,
    ) -> Self {
        Self {
            source_directory: source_directory.into(),
            dependency_archives: dependency_archives.into_iter().collect(),
            api_project,
        }
    }

    /// Returns the root of the acquired source tree.
    #[must_use]
    pub fn source_directory(&self) -> &Utf8Path {
        &self.source_directory
    }

    /// Returns the dependency archives available for type resolution.
    #[must_use]
    pub const fn dependency_archives(&self) -> &BTreeSet<Utf8PathBuf> {
        &self.dependency_archives
    }

    /// Returns the source API project whose usages are extracted.
    #[must_use]
    pub const fn api_project(&self) -> ProjectId {
        self.api_project
    }
}

/// What the extractor found in a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionOutput {
    /// API classes referenced by the tree.
    pub api_classes: BTreeSet<ApiClass>,
    /// Raw examples, in discovery order.
    pub examples: Vec<Example>,
    /// Dependency archives the extractor actually resolved.
    pub dependency_archives: BTreeSet<Utf8PathBuf>,
}

/// Parses a source tree and mines usage examples of the source API.
#[async_trait]
pub trait ExampleExtractor: Send + Sync {
    /// Extracts API classes and examples.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractorError`] when the tree cannot be analysed.
    async fn extract(&self, request: &ExtractionRequest) -> ExtractorResult<ExtractionOutput>;
}

/// Errors returned by extractor implementations.
#[derive(Debug, Clone, Error)]
pub enum ExtractorError {
    /// The source tree could not be parsed.
    #[error("cannot parse {path}: {reason}")]
    Parse {
        /// File or directory that failed.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        reason: String,
    },

    /// Any other extractor failure.
    #[error("extractor error: {0}")]
    Extractor(Arc<dyn std::error::Error + Send + Sync>),
}

impl ExtractorError {
    /// Wraps an arbitrary extractor failure.
    pub fn extractor(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Extractor(Arc::new(err))
    }
}
