//! Text similarity metrics used to detect near-duplicate examples.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Symmetric similarity score between two code texts.
///
/// Implementations must return a value in `[0, 1]` and satisfy
/// `similarity(a, b) == similarity(b, a)`.
pub trait SimilarityMetric: Send + Sync {
    /// Scores how alike `left` and `right` are.
    fn similarity(&self, left: &str, right: &str) -> f64;
}

/// Token stream a [`CosineSimilarity`] builds its vectors from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenization {
    /// Overlapping pairs of characters, spaces included.
    #[default]
    CharacterBigrams,
    /// Whitespace-separated words.
    Whitespace,
}

/// Cosine similarity over term-frequency vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CosineSimilarity {
    tokenization: Tokenization,
}

impl CosineSimilarity {
    /// Creates a metric using the given tokenization.
    #[must_use]
    pub const fn new(tokenization: Tokenization) -> Self {
        Self { tokenization }
    }

    /// Returns the configured tokenization.
    #[must_use]
    pub const fn tokenization(&self) -> Tokenization {
        self.tokenization
    }

    fn term_frequencies(&self, text: &str) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        match self.tokenization {
            Tokenization::Whitespace => {
                for word in text.split_whitespace() {
                    *counts.entry(word.to_owned()).or_insert(0_u32) += 1;
                }
            }
            Tokenization::CharacterBigrams => {
                let chars: Vec<char> = text.chars().collect();
                for pair in chars.windows(2) {
                    let bigram: String = pair.iter().collect();
                    *counts.entry(bigram).or_insert(0_u32) += 1;
                }
            }
        }
        counts
    }
}

impl SimilarityMetric for CosineSimilarity {
    #[expect(
        clippy::float_arithmetic,
        reason = "cosine similarity is defined over real-valued vectors"
    )]
    fn similarity(&self, left: &str, right: &str) -> f64 {
        let normalized_left = normalize_whitespace(left);
        let normalized_right = normalize_whitespace(right);
        if normalized_left == normalized_right {
            return 1.0;
        }

        let left_terms = self.term_frequencies(&normalized_left);
        let right_terms = self.term_frequencies(&normalized_right);
        if left_terms.is_empty() || right_terms.is_empty() {
            return 0.0;
        }

        let dot: f64 = left_terms
            .iter()
            .filter_map(|(term, count)| {
                right_terms
                    .get(term)
                    .map(|other| f64::from(*count) * f64::from(*other))
            })
            .sum();
        let denominator = magnitude(&left_terms) * magnitude(&right_terms);
        if denominator <= 0.0 {
            return 0.0;
        }
        (dot / denominator).clamp(0.0, 1.0)
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "vector magnitude is a real-valued quantity"
)]
fn magnitude(terms: &HashMap<String, u32>) -> f64 {
    terms
        .values()
        .map(|count| f64::from(*count) * f64::from(*count))
        .sum::<f64>()
        .sqrt()
}

/// Collapses whitespace runs to one space and trims both ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
