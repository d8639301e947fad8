//! Near-duplicate detection for mined code examples.
//!
//! - Similarity metrics in [`domain`]
//! - The clustering engine in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
