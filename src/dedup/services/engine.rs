//! Near-duplicate removal over mined examples.

use crate::dedup::domain::{CosineSimilarity, SimilarityMetric};
use crate::project::domain::{ApiSignature, Example};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

/// Inclusive lower bound at which two examples count as near-duplicates.
pub const SIMILARITY_THRESHOLD: f64 = 0.80;

/// Removes near-duplicate examples within groups of equal API signature.
#[derive(Clone)]
pub struct DeduplicationEngine {
    metric: Arc<dyn SimilarityMetric>,
}

impl DeduplicationEngine {
    /// Creates an engine scoring examples with `metric`.
    #[must_use]
    pub fn new(metric: Arc<dyn SimilarityMetric>) -> Self {
        Self { metric }
    }

    /// Reduces `examples` to one representative per near-duplicate cluster.
    ///
    /// Examples are grouped by [`ApiSignature`]; examples in different groups
    /// are never compared. Within a group, textually identical examples are
    /// collapsed onto the first one encountered, then the first remaining
    /// example repeatedly becomes a representative and every remaining
    /// example scoring at least [`SIMILARITY_THRESHOLD`] against it is
    /// dropped.
    ///
    /// Groups appear in the output in order of first appearance and
    /// representatives keep their input order, so reducing an already
    /// reduced collection returns it unchanged.
    #[must_use]
    pub fn reduce(&self, examples: Vec<Example>) -> Vec<Example> {
        if examples.len() < 2 {
            return examples;
        }

        let input_count = examples.len();
        let groups = group_by_signature(examples);
        let group_count = groups.len();
        let retained: Vec<Example> = groups
            .into_iter()
            .flat_map(|group| self.reduce_group(group))
            .collect();

        tracing::debug!(
            input = input_count,
            groups = group_count,
            retained = retained.len(),
            "removed similar examples"
        );
        retained
    }

    fn reduce_group(&self, group: Vec<Example>) -> Vec<Example> {
        let mut pool = collapse_identical(group);
        let mut representatives = Vec::new();
        while let Some(representative) = pool.pop_front() {
            pool.retain(|candidate| {
                self.metric
                    .similarity(representative.code(), candidate.code())
                    < SIMILARITY_THRESHOLD
            });
            representatives.push(representative);
        }
        representatives
    }
}

impl Default for DeduplicationEngine {
    fn default() -> Self {
        Self::new(Arc::new(CosineSimilarity::default()))
    }
}

impl std::fmt::Debug for DeduplicationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeduplicationEngine")
            .field("threshold", &SIMILARITY_THRESHOLD)
            .finish_non_exhaustive()
    }
}

/// Partitions examples by signature, preserving first-appearance order of
/// groups and encounter order within each group.
fn group_by_signature(examples: Vec<Example>) -> Vec<Vec<Example>> {
    let mut positions: HashMap<ApiSignature, usize> = HashMap::new();
    let mut groups: Vec<Vec<Example>> = Vec::new();
    for example in examples {
        let position = *positions
            .entry(example.signature().clone())
            .or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
        if let Some(group) = groups.get_mut(position) {
            group.push(example);
        }
    }
    groups
}

/// Keeps the first example for each distinct code text.
fn collapse_identical(group: Vec<Example>) -> VecDeque<Example> {
    let mut seen: HashSet<String> = HashSet::new();
    group
        .into_iter()
        .filter(|example| seen.insert(example.code().to_owned()))
        .collect()
}
