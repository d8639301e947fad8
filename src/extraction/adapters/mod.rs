//! Adapter implementations of the extractor port.

pub mod memory;

pub use memory::StaticExtractor;
