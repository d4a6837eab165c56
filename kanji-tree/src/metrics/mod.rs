//! Structural complexity metrics over resolved decomposition trees
//!
//! All traversals are iterative (see [`DecompositionTreeNode::walk`]).

mod normalize;

pub use normalize::{
    normalize_all, percentile_normalize, round_to, MetricPercentiles, NormalizedMetrics,
    PercentileRanker,
};

use crate::resolver::{DecompositionTreeNode, ResolveError, Resolver};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

/// Per-character structural statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    pub depth: usize,
    pub size: usize,
    pub leaf_count: usize,
    pub radical_count: usize,
    pub branching_factor: f64,
}

/// 1 for a leaf, otherwise 1 + the deepest child
pub fn depth(node: &DecompositionTreeNode) -> usize {
    node.walk().map(|(_, d)| d + 1).max().unwrap_or(1)
}

/// Total node count
pub fn size(node: &DecompositionTreeNode) -> usize {
    node.walk().count()
}

/// Terminal leaves only
pub fn leaf_count(node: &DecompositionTreeNode) -> usize {
    node.walk().filter(|(n, _)| n.is_leaf).count()
}

/// Distinct characters flagged as radicals anywhere in the tree
pub fn radical_set(node: &DecompositionTreeNode) -> BTreeSet<char> {
    node.walk()
        .filter(|(n, _)| n.is_radical)
        .map(|(n, _)| n.character)
        .collect()
}

/// Mean child count over non-leaf nodes; 0 when the root is a leaf
///
/// `⿰氵每` with both components atomic gives 2.0 (one internal node, two children).
pub fn branching_factor(node: &DecompositionTreeNode) -> f64 {
    let (internal, children) = node
        .walk()
        .filter(|(n, _)| !n.is_leaf)
        .fold((0usize, 0usize), |(internal, children), (n, _)| {
            (internal + 1, children + n.children.len())
        });
    if internal == 0 {
        0.0
    } else {
        children as f64 / internal as f64
    }
}

/// All metrics in a single traversal
pub fn compute_metrics(node: &DecompositionTreeNode) -> ComplexityMetrics {
    let mut max_depth = 0usize;
    let mut size = 0usize;
    let mut leaves = 0usize;
    let mut internal = 0usize;
    let mut child_links = 0usize;
    let mut radicals = BTreeSet::new();

    for (n, d) in node.walk() {
        size += 1;
        max_depth = max_depth.max(d + 1);
        if n.is_leaf {
            leaves += 1;
        } else {
            internal += 1;
            child_links += n.children.len();
        }
        if n.is_radical {
            radicals.insert(n.character);
        }
    }

    ComplexityMetrics {
        depth: max_depth,
        size,
        leaf_count: leaves,
        radical_count: radicals.len(),
        branching_factor: if internal == 0 {
            0.0
        } else {
            child_links as f64 / internal as f64
        },
    }
}

/// A character left out of a batch result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterFailure {
    pub character: char,
    pub reason: String,
}

/// Batch result: successes keyed by character, failures listed apart
#[derive(Debug, Clone, Default)]
pub struct CorpusMetrics {
    pub metrics: BTreeMap<char, ComplexityMetrics>,
    pub failures: Vec<CharacterFailure>,
}

/// Resolve and measure every given character
///
/// A failing character is logged and listed in `failures`; the batch
/// always completes. With the `parallel` feature the work is spread over
/// the rayon pool; output ordering is identical either way.
pub fn compute_corpus(resolver: &Resolver<'_>, characters: &[char]) -> CorpusMetrics {
    let measure = |c: &char| -> (char, Result<ComplexityMetrics, ResolveError>) {
        (*c, resolver.resolve(*c).map(|tree| compute_metrics(&tree)))
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<(char, Result<ComplexityMetrics, ResolveError>)> = {
        use rayon::prelude::*;
        characters.par_iter().map(measure).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<(char, Result<ComplexityMetrics, ResolveError>)> =
        characters.iter().map(measure).collect();

    let mut corpus = CorpusMetrics::default();
    for (character, outcome) in outcomes {
        match outcome {
            Ok(metrics) => {
                corpus.metrics.insert(character, metrics);
            }
            Err(e) => {
                warn!("Skipping '{}' in corpus metrics: {}", character, e);
                corpus.failures.push(CharacterFailure {
                    character,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(
        "Corpus metrics: {} characters measured, {} failures",
        corpus.metrics.len(),
        corpus.failures.len()
    );
    corpus
}
