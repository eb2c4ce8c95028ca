//! Top-K selection of scored documents

use std::cmp::Ordering;

use derivative::Derivative;
use log::debug;

use crate::base::{DocId, ImpactValue};
use crate::heap::BoundedTopKHeap;

#[derive(Clone, Copy, Debug)]
pub struct ScoredDocument {
    pub docid: DocId,
    pub score: ImpactValue,
}

impl std::fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.docid, self.score)
    }
}

impl PartialEq for ScoredDocument {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredDocument {}

impl PartialOrd for ScoredDocument {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Higher scores come first
impl Ord for ScoredDocument {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.total_cmp(&self.score)
    }
}

#[derive(Derivative, Clone, Debug)]
#[derivative(Default)]
pub struct TopKOptions {
    /// Number of documents to retain (0 is raised to 1)
    #[derivative(Default(value = "10"))]
    pub top_k: usize,
}

/// Keeps the `top_k` documents with the highest scores
pub struct TopScoredDocuments {
    heap: BoundedTopKHeap<ScoredDocument>,
}

impl TopScoredDocuments {
    pub fn new(top_k: usize) -> Self {
        Self {
            heap: BoundedTopKHeap::new(top_k),
        }
    }

    pub fn from_options(options: &TopKOptions) -> Self {
        debug!("Selecting the top-{} documents", options.top_k);
        Self::new(options.top_k)
    }

    /// Add a new candidate, and returns the new lower bound on scores
    pub fn add(&mut self, candidate: DocId, score: ImpactValue) -> ImpactValue {
        self.heap.push(ScoredDocument {
            docid: candidate,
            score,
        });
        self.threshold()
    }

    /// Score a candidate must exceed to enter the top-K
    ///
    /// Until `top_k` documents have been seen, any score is accepted and
    /// negative infinity is returned.
    pub fn threshold(&self) -> ImpactValue {
        match self.heap.top() {
            Some(worst) if self.heap.is_full() => worst.score,
            _ => ImpactValue::NEG_INFINITY,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The retained documents, highest score first
    pub fn into_sorted_vec(self) -> Vec<ScoredDocument> {
        self.heap.into_sorted_vec()
    }
}
