//! Schema validation for the radical reference list
//!
//! Works on untyped JSON so that one malformed entry produces findings
//! rather than aborting deserialization. Every check runs; nothing here
//! returns early or fails.

use super::{parse_code, KANGXI_BLOCK_START, RADICAL_COUNT};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Fields every radical entry must carry
pub const REQUIRED_FIELDS: [&str; 9] = [
    "number",
    "kangxi_radical",
    "radical",
    "code",
    "english_name",
    "meaning",
    "strokes",
    "variants",
    "notes",
];

/// One validation finding
///
/// `number` is the entry's radical number when it could be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("entry {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("missing field '{field}' in radical #{}", fmt_number(.number))]
    MissingField { number: Option<i64>, field: &'static str },

    #[error("'{field}' must be {expected} in radical #{}", fmt_number(.number))]
    WrongType {
        number: Option<i64>,
        field: &'static str,
        expected: &'static str,
    },

    #[error("numbering error: radicals should be numbered 1 to {} exactly", RADICAL_COUNT)]
    NumberingNotContiguous,

    #[error("numbering error: duplicate radical number {number}")]
    DuplicateNumber { number: i64 },

    #[error("invalid code format '{code}' in radical #{}", fmt_number(.number))]
    MalformedCode { number: Option<i64>, code: String },

    #[error("unicode mismatch in radical #{}: code {code} produces '{expected}' but kangxi_radical is '{found}'", fmt_number(.number))]
    CodeGlyphMismatch {
        number: Option<i64>,
        code: String,
        expected: char,
        found: String,
    },

    #[error("sequential unicode mismatch at #{number}: expected U+{expected:04X}, got {code}")]
    NonSequentialCode { number: i64, expected: u32, code: String },

    #[error("duplicate variants in radical #{}", fmt_number(.number))]
    DuplicateVariants { number: Option<i64> },

    #[error("variant '{variant}' in radical #{} is not a single glyph", fmt_number(.number))]
    VariantNotSingleGlyph { number: Option<i64>, variant: String },

    #[error("invalid stroke count in radical #{}", fmt_number(.number))]
    InvalidStrokes { number: Option<i64> },

    #[error("empty {field} for radical #{}", fmt_number(.number))]
    EmptyField { number: Option<i64>, field: &'static str },
}

fn fmt_number(number: &Option<i64>) -> String {
    match number {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    }
}

/// Collected findings for a whole radical list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    pub errors: Vec<SchemaError>,
}

impl SchemaReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.errors.iter()
    }
}

impl std::fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "All radicals passed validation with no errors.");
        }
        writeln!(f, "Validation errors detected:")?;
        for error in &self.errors {
            writeln!(f, " - {}", error)?;
        }
        Ok(())
    }
}

/// Validate a full radical reference list
pub fn validate_radicals(entries: &[Value]) -> SchemaReport {
    let mut errors = Vec::new();

    check_numbering(entries, &mut errors);

    for (index, entry) in entries.iter().enumerate() {
        match entry.as_object() {
            Some(_) => check_entry(entry, &mut errors),
            None => errors.push(SchemaError::NotAnObject { index }),
        }
    }

    SchemaReport { errors }
}

fn check_numbering(entries: &[Value], errors: &mut Vec<SchemaError>) {
    let mut numbers: Vec<i64> = entries
        .iter()
        .filter_map(|e| e.get("number").and_then(Value::as_i64))
        .collect();
    numbers.sort_unstable();

    let expected: Vec<i64> = (1..=i64::from(RADICAL_COUNT)).collect();
    if numbers != expected {
        errors.push(SchemaError::NumberingNotContiguous);
    }

    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for n in &numbers {
        *counts.entry(*n).or_default() += 1;
    }
    for (number, count) in counts {
        if count > 1 {
            errors.push(SchemaError::DuplicateNumber { number });
        }
    }
}

fn check_entry(entry: &Value, errors: &mut Vec<SchemaError>) {
    let number = entry.get("number").and_then(Value::as_i64);

    for field in REQUIRED_FIELDS {
        if entry.get(field).is_none() {
            errors.push(SchemaError::MissingField { number, field });
        }
    }

    if entry.get("number").is_some() && number.is_none() {
        errors.push(SchemaError::WrongType { number, field: "number", expected: "an integer" });
    }

    check_code(entry, number, errors);
    check_variants(entry, number, errors);

    if let Some(strokes) = entry.get("strokes") {
        if !matches!(strokes.as_i64(), Some(s) if s > 0) {
            errors.push(SchemaError::InvalidStrokes { number });
        }
    }

    for field in ["english_name", "meaning"] {
        if let Some(value) = entry.get(field) {
            let empty = match value {
                Value::String(s) => s.is_empty(),
                Value::Null => true,
                _ => false,
            };
            if empty {
                errors.push(SchemaError::EmptyField { number, field });
            }
        }
    }
}

/// `U+2F` followed by exactly two uppercase hex digits
fn is_well_formed_code(code: &str) -> bool {
    match code.strip_prefix("U+2F") {
        Some(rest) => rest.len() == 2 && rest.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')),
        None => false,
    }
}

fn check_code(entry: &Value, number: Option<i64>, errors: &mut Vec<SchemaError>) {
    let code = match entry.get("code") {
        Some(Value::String(code)) => code,
        Some(_) => {
            errors.push(SchemaError::WrongType { number, field: "code", expected: "a string" });
            return;
        }
        None => return,
    };

    if !is_well_formed_code(code) {
        errors.push(SchemaError::MalformedCode { number, code: code.clone() });
    }

    let Some(codepoint) = parse_code(code) else {
        return;
    };

    if let Some(expected) = char::from_u32(codepoint) {
        let found = entry.get("kangxi_radical").and_then(Value::as_str).unwrap_or_default();
        let mut found_chars = found.chars();
        if found_chars.next() != Some(expected) || found_chars.next().is_some() {
            errors.push(SchemaError::CodeGlyphMismatch {
                number,
                code: code.clone(),
                expected,
                found: found.to_string(),
            });
        }
    }

    if let Some(n) = number {
        let expected = KANGXI_BLOCK_START as i64 + n - 1;
        if i64::from(codepoint) != expected {
            errors.push(SchemaError::NonSequentialCode {
                number: n,
                expected: expected.max(0) as u32,
                code: code.clone(),
            });
        }
    }
}

fn check_variants(entry: &Value, number: Option<i64>, errors: &mut Vec<SchemaError>) {
    let variants = match entry.get("variants") {
        Some(Value::Array(variants)) => variants,
        Some(_) => {
            errors.push(SchemaError::WrongType { number, field: "variants", expected: "a list" });
            return;
        }
        None => return,
    };

    let mut seen = HashSet::new();
    let mut duplicated = false;
    for variant in variants {
        let text = match variant {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if !seen.insert(text.clone()) {
            duplicated = true;
        }
        if text.chars().count() != 1 {
            errors.push(SchemaError::VariantNotSingleGlyph { number, variant: text });
        }
    }
    if duplicated {
        errors.push(SchemaError::DuplicateVariants { number });
    }
}
