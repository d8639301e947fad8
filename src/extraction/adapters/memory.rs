//! In-memory extractor returning a prepared result.

use crate::extraction::ports::{
    ExampleExtractor, ExtractionOutput, ExtractionRequest, ExtractorError, ExtractorResult,
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Extractor that returns a fixed result and records each request.
#[derive(Debug, Clone)]
pub struct StaticExtractor {
    outcome: Result<ExtractionOutput, ExtractorError>,
    requests: Arc<RwLock<Vec<ExtractionRequest>>>,
}

impl StaticExtractor {
    /// Creates an extractor returning `output` for every request.
    #[must_use]
    pub fn new(output: ExtractionOutput) -> Self {
        Self {
            outcome: Ok(output),
            requests: Arc::default(),
        }
    }

    /// Creates an extractor failing every request with `error`.
    #[must_use]
    pub fn failing(error: ExtractorError) -> Self {
        Self {
            outcome: Err(error),
            requests: Arc::default(),
        }
    }

    /// Returns the requests received so far.
    ///
    /// # Errors
    ///
    /// Returns an extractor error when lock acquisition fails.
    pub fn requests(&self) -> ExtractorResult<Vec<ExtractionRequest>> {
        let requests = self
            .requests
            .read()
            .map_err(|err| ExtractorError::extractor(std::io::Error::other(err.to_string())))?;
        Ok(requests.clone())
    }
}

#[async_trait]
impl ExampleExtractor for StaticExtractor {
    async fn extract(&self, request: &ExtractionRequest) -> ExtractorResult<ExtractionOutput> {
        self.requests
            .write()
            .map_err(|err| ExtractorError::extractor(std::io::Error::other(err.to_string())))?
            .push(request.clone());
        self.outcome.clone()
    }
}
