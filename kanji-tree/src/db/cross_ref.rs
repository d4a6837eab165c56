//! Reverse index: radical → characters that use it

use super::KanjiDatabase;
use kanji_common::ids::Position;
use kanji_common::radicals::{RadicalIndex, VariantIndex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// How one character uses a radical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadicalUsage {
    pub position: Position,
    /// Glyph as written in the IDS (canonical or variant form)
    pub form: char,
}

/// Cross-reference record for one radical
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReferenceEntry {
    pub radical_id: u32,
    pub name: String,
    pub kanji_using: BTreeMap<char, RadicalUsage>,
}

/// Derived radical → using-characters map
///
/// Every indexed radical has an entry, possibly with no users.
#[derive(Debug, Clone, Default)]
pub struct RadicalCrossReference {
    by_radical: BTreeMap<char, CrossReferenceEntry>,
}

impl RadicalCrossReference {
    /// Invert the database through the variant index
    ///
    /// When a character uses the same radical more than once, the first
    /// occurrence in component order is recorded.
    pub fn build(db: &KanjiDatabase, variants: &VariantIndex, radicals: &RadicalIndex) -> Self {
        let mut by_radical: BTreeMap<char, CrossReferenceEntry> = radicals
            .sorted()
            .into_iter()
            .map(|r| {
                (
                    r.radical,
                    CrossReferenceEntry {
                        radical_id: r.number,
                        name: r.english_name.clone(),
                        kanji_using: BTreeMap::new(),
                    },
                )
            })
            .collect();

        let mut links = 0usize;
        for entry in db.entries() {
            for component in &entry.components {
                let Some(radical) = variants.radical_for(component.component, radicals) else {
                    continue;
                };
                if let Some(xref) = by_radical.get_mut(&radical.radical) {
                    xref.kanji_using.entry(entry.character).or_insert_with(|| {
                        links += 1;
                        RadicalUsage {
                            position: component.position,
                            form: component.component,
                        }
                    });
                }
            }
        }

        info!("Radical cross-reference built: {} radicals, {} links", by_radical.len(), links);
        Self { by_radical }
    }

    /// Entry for a canonical radical glyph
    pub fn get(&self, radical: char) -> Option<&CrossReferenceEntry> {
        self.by_radical.get(&radical)
    }

    /// Entry for a canonical or variant glyph
    pub fn lookup(&self, glyph: char, variants: &VariantIndex) -> Option<&CrossReferenceEntry> {
        variants.canonical_of(glyph).and_then(|canonical| self.get(canonical))
    }

    pub fn len(&self) -> usize {
        self.by_radical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_radical.is_empty()
    }
}
