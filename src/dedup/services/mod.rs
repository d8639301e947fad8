//! Application services for example deduplication.

mod engine;

pub use engine::{DeduplicationEngine, SIMILARITY_THRESHOLD};
