//! Port contracts for example extraction.

pub mod extractor;

pub use extractor::{
    ExampleExtractor, ExtractionOutput, ExtractionRequest, ExtractorError, ExtractorResult,
};
