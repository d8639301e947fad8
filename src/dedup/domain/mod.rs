//! Domain model for near-duplicate example detection.

mod similarity;

pub use similarity::{CosineSimilarity, SimilarityMetric, Tokenization};
