//! Corpus-wide percentile normalization
//!
//! Rank of `v` is the fraction of the distribution that is `<= v`
//! (right-inclusive), so the maximum always ranks 1.0.

use super::ComplexityMetrics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sorted distribution for right-inclusive percentile ranks
#[derive(Debug, Clone, Default)]
pub struct PercentileRanker {
    sorted: Vec<f64>,
}

impl PercentileRanker {
    /// NaN values are dropped
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);
        Self { sorted }
    }

    /// Fraction of values `<= v`; 0.0 for an empty distribution
    pub fn rank(&self, v: f64) -> f64 {
        if self.sorted.is_empty() {
            return 0.0;
        }
        let at_or_below = self.sorted.partition_point(|x| *x <= v);
        at_or_below as f64 / self.sorted.len() as f64
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// Build a rank function over a distribution
pub fn percentile_normalize(values: impl IntoIterator<Item = f64>) -> impl Fn(f64) -> f64 {
    let ranker = PercentileRanker::new(values);
    move |v| ranker.rank(v)
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(15) as i32);
    (value * factor).round() / factor
}

/// Percentile rank of each metric field, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPercentiles {
    pub depth: f64,
    pub size: f64,
    pub leaf_count: f64,
    pub radical_count: f64,
    pub branching_factor: f64,
}

/// Raw metrics plus their corpus percentiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMetrics {
    #[serde(flatten)]
    pub raw: ComplexityMetrics,
    pub percentiles: MetricPercentiles,
}

/// Normalize every field independently across the whole map
pub fn normalize_all(
    metrics: &BTreeMap<char, ComplexityMetrics>,
    precision: u32,
) -> BTreeMap<char, NormalizedMetrics> {
    let field = |f: fn(&ComplexityMetrics) -> f64| PercentileRanker::new(metrics.values().map(f));

    let depth = field(|m| m.depth as f64);
    let size = field(|m| m.size as f64);
    let leaf_count = field(|m| m.leaf_count as f64);
    let radical_count = field(|m| m.radical_count as f64);
    let branching_factor = field(|m| m.branching_factor);

    metrics
        .iter()
        .map(|(character, m)| {
            let percentiles = MetricPercentiles {
                depth: round_to(depth.rank(m.depth as f64), precision),
                size: round_to(size.rank(m.size as f64), precision),
                leaf_count: round_to(leaf_count.rank(m.leaf_count as f64), precision),
                radical_count: round_to(radical_count.rank(m.radical_count as f64), precision),
                branching_factor: round_to(branching_factor.rank(m.branching_factor), precision),
            };
            (*character, NormalizedMetrics { raw: *m, percentiles })
        })
        .collect()
}
