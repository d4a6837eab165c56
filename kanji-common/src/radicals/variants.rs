//! Variant glyph → canonical radical glyph lookup

use super::{KangxiRadical, RadicalError, RadicalIndex};
use std::collections::HashMap;

/// Maps every canonical radical glyph to itself and every listed variant
/// to its owning canonical glyph
#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    to_canonical: HashMap<char, char>,
}

impl VariantIndex {
    /// Build the index, collecting conflicts instead of failing
    ///
    /// Canonical glyphs are registered first, then variants in ascending
    /// radical-number order; the first claim on a glyph wins.
    pub fn build(index: &RadicalIndex) -> (Self, Vec<RadicalError>) {
        let radicals = index.sorted();
        let mut to_canonical = HashMap::with_capacity(radicals.len() * 2);
        let mut issues = Vec::new();

        for radical in &radicals {
            to_canonical.insert(radical.radical, radical.radical);
        }

        for radical in &radicals {
            register_variants(radical, &mut to_canonical, &mut issues);
        }

        (Self { to_canonical }, issues)
    }

    /// Build the index, failing on the first conflict
    pub fn build_strict(index: &RadicalIndex) -> Result<Self, RadicalError> {
        let (variants, mut issues) = Self::build(index);
        if issues.is_empty() {
            Ok(variants)
        } else {
            Err(issues.swap_remove(0))
        }
    }

    /// Canonical radical glyph for a canonical or variant glyph
    pub fn canonical_of(&self, glyph: char) -> Option<char> {
        self.to_canonical.get(&glyph).copied()
    }

    /// Radical entry a glyph stands for, if any
    pub fn radical_for<'a>(&self, glyph: char, radicals: &'a RadicalIndex) -> Option<&'a KangxiRadical> {
        self.canonical_of(glyph).and_then(|canonical| radicals.get(canonical))
    }

    /// True iff the glyph's canonical form is a key of the radical table
    pub fn is_radical(&self, glyph: char, radicals: &RadicalIndex) -> bool {
        self.radical_for(glyph, radicals).is_some()
    }

    pub fn len(&self) -> usize {
        self.to_canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_canonical.is_empty()
    }
}

fn register_variants(
    radical: &KangxiRadical,
    to_canonical: &mut HashMap<char, char>,
    issues: &mut Vec<RadicalError>,
) {
    for variant in &radical.variants {
        let mut glyphs = variant.chars();
        let glyph = match (glyphs.next(), glyphs.next()) {
            (Some(glyph), None) => glyph,
            _ => {
                issues.push(RadicalError::MalformedVariant {
                    variant: variant.clone(),
                    radical: radical.number,
                });
                continue;
            }
        };

        match to_canonical.get(&glyph) {
            // Listing the canonical glyph itself as a variant is harmless
            Some(existing) if *existing == radical.radical && glyph == radical.radical => {}
            Some(existing) => issues.push(RadicalError::DuplicateVariant {
                variant: glyph,
                existing: *existing,
                rejected: radical.radical,
            }),
            None => {
                to_canonical.insert(glyph, radical.radical);
            }
        }
    }
}
