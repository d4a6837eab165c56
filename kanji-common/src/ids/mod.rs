//! Ideographic Description Sequences
//!
//! Cleaning of raw IDS strings, parsing into operator trees, and mapping
//! operator slots to position labels.

mod operator;
mod parser;
mod position;

pub use operator::{is_unsupported_description_char, IdsOperator};
pub use parser::{parse_ids, IdsNode, ParseError, MAX_NESTING};
pub use position::{flatten, positions_for, Position, PositionedComponent};

/// Strip one trailing bracketed source annotation (`⿰氵每[G]` → `⿰氵每`)
///
/// Only a `[...]` group that ends the string is removed. Brackets anywhere
/// else are left alone.
pub fn clean_ids(raw: &str) -> &str {
    if !raw.ends_with(']') {
        return raw;
    }
    match raw.rfind('[') {
        Some(open) => &raw[..open],
        None => raw,
    }
}
