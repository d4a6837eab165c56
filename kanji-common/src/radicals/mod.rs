//! Kangxi radical reference data
//!
//! The 214 Kangxi radicals occupy the contiguous block U+2F00..U+2FD5.
//! Radicals are indexed by their canonical CJK Unified Ideograph glyph
//! (`radical`), not by the Kangxi-block presentation glyph.

mod validation;
mod variants;

pub use validation::{validate_radicals, SchemaError, SchemaReport, REQUIRED_FIELDS};
pub use variants::VariantIndex;

use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Number of Kangxi radicals
pub const RADICAL_COUNT: u32 = 214;

/// Codepoint of KANGXI RADICAL ONE
pub const KANGXI_BLOCK_START: u32 = 0x2F00;

/// One entry of the radical reference list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KangxiRadical {
    /// 1..=214
    pub number: u32,
    /// Presentation glyph from the Kangxi Radicals block
    pub kangxi_radical: char,
    /// Canonical CJK Unified Ideograph glyph, used as the lookup key
    pub radical: char,
    /// `U+2FXX`
    pub code: String,
    pub english_name: String,
    pub meaning: String,
    pub strokes: u32,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl KangxiRadical {
    /// Codepoint the radical number should map to in the Kangxi block
    pub fn expected_codepoint(&self) -> u32 {
        KANGXI_BLOCK_START + self.number.saturating_sub(1)
    }
}

/// Parse a `U+XXXX` code into a codepoint
pub fn parse_code(code: &str) -> Option<u32> {
    let hex = code.strip_prefix("U+")?;
    if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// Problems found while indexing radicals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadicalError {
    /// Two radicals share a canonical glyph
    #[error("canonical glyph '{glyph}' used by radicals #{first} and #{second}")]
    DuplicateCanonical { glyph: char, first: u32, second: u32 },

    /// A variant glyph is claimed twice (or shadows a canonical glyph)
    #[error("variant '{variant}' already maps to '{existing}', ignoring mapping to '{rejected}'")]
    DuplicateVariant {
        variant: char,
        existing: char,
        rejected: char,
    },

    /// Variant string is not exactly one glyph
    #[error("variant '{variant}' of radical #{radical} is not a single glyph")]
    MalformedVariant { variant: String, radical: u32 },
}

/// Canonical radical table keyed by canonical glyph
#[derive(Debug, Clone, Default)]
pub struct RadicalIndex {
    by_glyph: HashMap<char, KangxiRadical>,
}

impl RadicalIndex {
    /// Index radicals by canonical glyph
    ///
    /// On a duplicate canonical glyph the first radical (in list order)
    /// is kept and the conflict is returned.
    pub fn build(radicals: Vec<KangxiRadical>) -> (Self, Vec<RadicalError>) {
        let mut by_glyph: HashMap<char, KangxiRadical> = HashMap::with_capacity(radicals.len());
        let mut issues = Vec::new();

        for radical in radicals {
            if let Some(existing) = by_glyph.get(&radical.radical) {
                issues.push(RadicalError::DuplicateCanonical {
                    glyph: radical.radical,
                    first: existing.number,
                    second: radical.number,
                });
                continue;
            }
            by_glyph.insert(radical.radical, radical);
        }

        (Self { by_glyph }, issues)
    }

    pub fn get(&self, glyph: char) -> Option<&KangxiRadical> {
        self.by_glyph.get(&glyph)
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.by_glyph.contains_key(&glyph)
    }

    /// Radicals in ascending number order
    pub fn sorted(&self) -> Vec<&KangxiRadical> {
        let mut radicals: Vec<&KangxiRadical> = self.by_glyph.values().collect();
        radicals.sort_by_key(|r| r.number);
        radicals
    }

    pub fn len(&self) -> usize {
        self.by_glyph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_glyph.is_empty()
    }
}

/// Read the radical reference file as untyped JSON entries
///
/// Fails only when the file cannot be read or is not a JSON array.
pub fn read_radical_values(path: &Path) -> Result<Vec<serde_json::Value>> {
    let content = std::fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&content)?;
    Ok(values)
}

/// Convert untyped entries into radicals, skipping entries that do not fit
/// the model
///
/// Skipped entries are logged; the schema validator reports the details.
pub fn radicals_from_values(values: &[serde_json::Value]) -> Vec<KangxiRadical> {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, value)| {
            match serde_json::from_value::<KangxiRadical>(value.clone()) {
                Ok(radical) => Some(radical),
                Err(e) => {
                    warn!("Skipping radical entry {}: {}", i, e);
                    None
                }
            }
        })
        .collect()
}
