//! Boundary to the source-code extractor.
//!
//! Parsing and API-usage analysis happen behind [`ports::ExampleExtractor`];
//! this crate only hands it a source tree and consumes its output.

pub mod adapters;
pub mod ports;

#[cfg(test)]
mod tests;
