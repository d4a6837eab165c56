//! Recursive-descent IDS parser
//!
//! One glyph is one token. An operator glyph consumes exactly `arity`
//! following sub-sequences; any other glyph is a leaf. The whole input
//! must be consumed.

use super::operator::{is_unsupported_description_char, IdsOperator};
use serde::{Deserialize, Serialize};
use std::iter::Peekable;
use std::str::Chars;
use thiserror::Error;

/// Nesting limit for operator chains
///
/// Real Unihan sequences nest a handful of levels; this only stops
/// pathological input from exhausting the stack.
pub const MAX_NESTING: usize = 64;

/// IDS parse failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing to parse
    #[error("empty IDS")]
    EmptyInput,

    /// Root parsed but input remains
    #[error("IDS not fully consumed: {consumed} glyphs parsed, '{remaining}' left over")]
    IncompleteConsumption { consumed: usize, remaining: String },

    /// Description character outside the supported operator set
    #[error("unsupported IDS operator '{glyph}' at offset {offset}")]
    UnknownOperator { glyph: char, offset: usize },

    /// Input ran out before an operator received all its components
    #[error("operator {operator} expects {expected} components, found {found}")]
    ArityMismatch {
        operator: IdsOperator,
        expected: usize,
        found: usize,
    },

    /// Operator chain nested deeper than `MAX_NESTING`
    #[error("IDS nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Parsed IDS tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdsNode {
    /// Atomic component glyph
    Leaf { glyph: char },
    /// Operator applied to exactly `operator.arity()` children
    Operator {
        operator: IdsOperator,
        children: Vec<IdsNode>,
    },
}

impl IdsNode {
    /// Leaf glyphs in depth-first, left-to-right order
    pub fn leaves(&self) -> Vec<char> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<char>) {
        match self {
            IdsNode::Leaf { glyph } => out.push(*glyph),
            IdsNode::Operator { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

}

/// Parse a cleaned IDS string into a tree
///
/// # Examples
///
/// ```
/// use kanji_common::ids::{parse_ids, IdsNode, IdsOperator};
///
/// let tree = parse_ids("⿰氵毎").unwrap();
/// assert_eq!(
///     tree,
///     IdsNode::Operator {
///         operator: IdsOperator::LeftToRight,
///         children: vec![IdsNode::Leaf { glyph: '氵' }, IdsNode::Leaf { glyph: '毎' }],
///     }
/// );
/// ```
pub fn parse_ids(ids: &str) -> Result<IdsNode, ParseError> {
    let mut parser = IdsParser {
        chars: ids.chars().peekable(),
        offset: 0,
    };

    if parser.chars.peek().is_none() {
        return Err(ParseError::EmptyInput);
    }

    let root = parser.parse_node(0)?;

    if parser.chars.peek().is_some() {
        return Err(ParseError::IncompleteConsumption {
            consumed: parser.offset,
            remaining: parser.chars.collect(),
        });
    }

    Ok(root)
}

struct IdsParser<'a> {
    chars: Peekable<Chars<'a>>,
    /// Glyphs consumed so far
    offset: usize,
}

impl IdsParser<'_> {
    /// Caller guarantees at least one glyph remains
    fn parse_node(&mut self, depth: usize) -> Result<IdsNode, ParseError> {
        if depth > MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING });
        }

        let offset = self.offset;
        let glyph = self.chars.next().ok_or(ParseError::EmptyInput)?;
        self.offset += 1;

        if let Some(operator) = IdsOperator::from_char(glyph) {
            let expected = operator.arity();
            let mut children = Vec::with_capacity(expected);
            while children.len() < expected {
                if self.chars.peek().is_none() {
                    return Err(ParseError::ArityMismatch {
                        operator,
                        expected,
                        found: children.len(),
                    });
                }
                children.push(self.parse_node(depth + 1)?);
            }
            return Ok(IdsNode::Operator { operator, children });
        }

        if is_unsupported_description_char(glyph) {
            return Err(ParseError::UnknownOperator { glyph, offset });
        }

        Ok(IdsNode::Leaf { glyph })
    }
}
