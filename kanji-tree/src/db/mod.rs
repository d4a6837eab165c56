//! Working kanji database
//!
//! Built once from the raw records. A record whose IDS does not parse is
//! kept as an atomic entry; one bad record never aborts the load.

mod cross_ref;

pub use cross_ref::{CrossReferenceEntry, RadicalCrossReference, RadicalUsage};

use crate::source::RawRecord;
use kanji_common::ids::{clean_ids, flatten, parse_ids, ParseError, PositionedComponent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// One character with its first-level decomposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiEntry {
    pub codepoint: String,
    pub character: char,
    pub raw_ids: String,
    pub cleaned_ids: String,
    /// Empty when the character is atomic
    pub components: Vec<PositionedComponent>,
}

impl KanjiEntry {
    /// Clean, parse and flatten a raw record
    ///
    /// The parse error is returned alongside the (atomic) entry so the
    /// caller can report it.
    pub fn from_record(record: RawRecord) -> (Self, Option<ParseError>) {
        let cleaned = clean_ids(&record.raw_ids).to_string();
        let (components, error) = match parse_ids(&cleaned) {
            Ok(tree) => (flatten(&tree), None),
            Err(e) => (Vec::new(), Some(e)),
        };

        let entry = KanjiEntry {
            codepoint: record.codepoint,
            character: record.character,
            raw_ids: record.raw_ids,
            cleaned_ids: cleaned,
            components,
        };
        (entry, error)
    }

    pub fn is_atomic(&self) -> bool {
        self.components.is_empty()
    }
}

/// Character → entry map plus the records that failed to parse
#[derive(Debug, Clone, Default)]
pub struct KanjiDatabase {
    entries: BTreeMap<char, KanjiEntry>,
    parse_failures: BTreeMap<char, ParseError>,
}

impl KanjiDatabase {
    /// Build the database from raw records
    ///
    /// A later record for the same character replaces an earlier one.
    pub fn build(records: impl IntoIterator<Item = RawRecord>) -> Self {
        let mut db = KanjiDatabase::default();

        for record in records {
            let character = record.character;
            let (entry, error) = KanjiEntry::from_record(record);

            match error {
                Some(e) => {
                    warn!("IDS for {} ({}) not decomposable, keeping as atomic: {}", character, entry.codepoint, e);
                    db.parse_failures.insert(character, e);
                }
                None => {
                    db.parse_failures.remove(&character);
                }
            }

            if db.entries.insert(character, entry).is_some() {
                debug!("Duplicate record for {}, later record kept", character);
            }
        }

        info!(
            "Kanji database built: {} entries, {} decomposed, {} parse failures",
            db.entries.len(),
            db.entries.values().filter(|e| !e.is_atomic()).count(),
            db.parse_failures.len()
        );
        db
    }

    pub fn get(&self, character: char) -> Option<&KanjiEntry> {
        self.entries.get(&character)
    }

    /// Components of a character; empty when absent or atomic
    pub fn components_of(&self, character: char) -> &[PositionedComponent] {
        self.entries
            .get(&character)
            .map(|e| e.components.as_slice())
            .unwrap_or(&[])
    }

    /// Entries in character order
    pub fn entries(&self) -> impl Iterator<Item = &KanjiEntry> {
        self.entries.values()
    }

    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    pub fn parse_failures(&self) -> &BTreeMap<char, ParseError> {
        &self.parse_failures
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
