//! kanji-tree library - decomposition database and query surface
//!
//! Loads the decomposition source and the radical reference list once,
//! derives the kanji database, radical/variant indices and radical
//! cross-reference, and answers queries against that immutable state.

use kanji_common::config::{DataPaths, MetricsConfig};
use kanji_common::radicals::{
    radicals_from_values, read_radical_values, validate_radicals, KangxiRadical, RadicalIndex,
    VariantIndex,
};
use std::collections::BTreeMap;
use tracing::{info, warn};

pub mod db;
pub mod metrics;
pub mod render;
pub mod resolver;
pub mod source;

pub use db::{CrossReferenceEntry, KanjiDatabase, KanjiEntry, RadicalCrossReference, RadicalUsage};
pub use metrics::{CharacterFailure, ComplexityMetrics, CorpusMetrics, NormalizedMetrics};
pub use resolver::{DecompositionTreeNode, ResolveError, Resolver};
pub use source::RawRecord;

/// Normalized batch result
#[derive(Debug, Clone, Default)]
pub struct NormalizedCorpus {
    pub metrics: BTreeMap<char, NormalizedMetrics>,
    pub failures: Vec<CharacterFailure>,
}

/// Immutable query context, built once at startup
///
/// Holds every derived structure; all queries take `&self`.
#[derive(Debug, Clone)]
pub struct KanjiResources {
    db: KanjiDatabase,
    radicals: RadicalIndex,
    variants: VariantIndex,
    cross_reference: RadicalCrossReference,
    settings: MetricsConfig,
}

impl KanjiResources {
    /// Load both input files and derive all indices
    ///
    /// Only an unreadable or unparseable input file is fatal. Schema
    /// findings and index conflicts are logged as warnings.
    pub fn load(paths: &DataPaths, settings: MetricsConfig) -> kanji_common::Result<Self> {
        let records = source::read_source(&paths.ids_source)?;

        let values = read_radical_values(&paths.radicals)?;
        let report = validate_radicals(&values);
        if !report.is_valid() {
            warn!(
                "Radical reference {} has {} schema findings",
                paths.radicals.display(),
                report.len()
            );
            for finding in report.iter() {
                warn!("  {}", finding);
            }
        }
        let radicals = radicals_from_values(&values);
        info!("Loaded {} radicals from {}", radicals.len(), paths.radicals.display());

        Ok(Self::from_parts(records, radicals, settings))
    }

    /// Derive all indices from already-loaded inputs
    pub fn from_parts(
        records: Vec<RawRecord>,
        radicals: Vec<KangxiRadical>,
        settings: MetricsConfig,
    ) -> Self {
        let (radicals, issues) = RadicalIndex::build(radicals);
        for issue in &issues {
            warn!("Radical index: {}", issue);
        }

        let (variants, issues) = VariantIndex::build(&radicals);
        for issue in &issues {
            warn!("Variant index: {}", issue);
        }
        info!("Variant index built: {} glyphs for {} radicals", variants.len(), radicals.len());

        let db = KanjiDatabase::build(records);
        let cross_reference = RadicalCrossReference::build(&db, &variants, &radicals);

        Self {
            db,
            radicals,
            variants,
            cross_reference,
            settings,
        }
    }

    pub fn database(&self) -> &KanjiDatabase {
        &self.db
    }

    pub fn radicals(&self) -> &RadicalIndex {
        &self.radicals
    }

    pub fn variants(&self) -> &VariantIndex {
        &self.variants
    }

    pub fn cross_reference(&self) -> &RadicalCrossReference {
        &self.cross_reference
    }

    pub fn settings(&self) -> &MetricsConfig {
        &self.settings
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.db, &self.variants, &self.radicals, self.settings.max_tree_nodes)
    }

    /// Full decomposition tree of one character
    pub fn resolve(&self, character: char) -> Result<DecompositionTreeNode, ResolveError> {
        self.resolver().resolve(character)
    }

    /// Complexity metrics of one character
    pub fn metrics(&self, character: char) -> Result<ComplexityMetrics, ResolveError> {
        self.resolve(character).map(|tree| metrics::compute_metrics(&tree))
    }

    /// Metrics for every character in the database
    pub fn metrics_for_corpus(&self) -> CorpusMetrics {
        let characters: Vec<char> = self.db.characters().collect();
        metrics::compute_corpus(&self.resolver(), &characters)
    }

    /// Corpus metrics with per-field percentile ranks
    pub fn normalized_metrics_for_corpus(&self) -> NormalizedCorpus {
        let corpus = self.metrics_for_corpus();
        NormalizedCorpus {
            metrics: metrics::normalize_all(&corpus.metrics, self.settings.precision),
            failures: corpus.failures,
        }
    }

    /// Cross-reference entry for a radical given in canonical or variant form
    pub fn radicals_using(&self, glyph: char) -> Option<&CrossReferenceEntry> {
        self.cross_reference.lookup(glyph, &self.variants)
    }
}
