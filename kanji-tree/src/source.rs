//! Tab-separated decomposition source loader
//!
//! Line format: `<codepoint>\t<character>\t<rawIDS>[\t...ignored]`.
//! Blank lines and `#` comments are skipped; only lines whose first field
//! starts with `U+` are records.

use kanji_common::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// One decomposition record as read from the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub codepoint: String,
    pub character: char,
    pub raw_ids: String,
}

impl RawRecord {
    pub fn new(codepoint: impl Into<String>, character: char, raw_ids: impl Into<String>) -> Self {
        Self {
            codepoint: codepoint.into(),
            character,
            raw_ids: raw_ids.into(),
        }
    }
}

/// Parse one source line; `None` for comments, blanks and non-records
pub fn parse_source_line(line: &str) -> Option<RawRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || !line.starts_with("U+") {
        return None;
    }

    let mut fields = line.split('\t');
    let (Some(codepoint), Some(character), Some(raw_ids)) = (fields.next(), fields.next(), fields.next())
    else {
        return None;
    };

    let mut glyphs = character.chars();
    let character = match (glyphs.next(), glyphs.next()) {
        (Some(c), None) => c,
        _ => {
            debug!("Skipping {}: character field '{}' is not one glyph", codepoint, character);
            return None;
        }
    };

    Some(RawRecord::new(codepoint, character, raw_ids))
}

/// Read every record from a buffered source
pub fn parse_source<R: BufRead>(reader: R) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut lines = 0usize;
    for line in reader.lines() {
        let line = line?;
        lines += 1;
        if let Some(record) = parse_source_line(&line) {
            records.push(record);
        }
    }
    debug!("Read {} records from {} lines", records.len(), lines);
    Ok(records)
}

/// Read the decomposition source file
pub fn read_source(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)?;
    let records = parse_source(BufReader::new(file))?;
    info!("Loaded {} decomposition records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_line() {
        let record = parse_source_line("U+6D77\t海\t⿰氵每[G]").unwrap();
        assert_eq!(record, RawRecord::new("U+6D77", '海', "⿰氵每[G]"));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let record = parse_source_line("U+6D77\t海\t⿰氵每\t⿰氵毎[J]").unwrap();
        assert_eq!(record.raw_ids, "⿰氵每");
    }

    #[test]
    fn test_skipped_lines() {
        assert!(parse_source_line("").is_none());
        assert!(parse_source_line("   ").is_none());
        assert!(parse_source_line("# U+6D77\t海\t⿰氵每").is_none());
        assert!(parse_source_line("CDP-8BBF\t海\t⿰氵每").is_none());
        assert!(parse_source_line("U+6D77\t海").is_none());
        assert!(parse_source_line("U+6D77\t海海\t⿰氵每").is_none());
    }

    #[test]
    fn test_parse_source_reader() {
        let text = "# header\nU+4E00\t一\t一\n\nU+6D77\t海\t⿰氵每[G]\nbogus line\n";
        let records = parse_source(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].character, '一');
        assert_eq!(records[1].character, '海');
    }
}
