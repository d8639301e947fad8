//! Application services for running extraction tasks.

mod pipeline;

pub use pipeline::ExtractionPipeline;
