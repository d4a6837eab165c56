//! IDS composition operators
//!
//! The twelve Ideographic Description Characters of the Unicode 3.0
//! block (U+2FF0..U+2FFB). Ten are binary, the two three-way splits are
//! ternary.

use serde::{Deserialize, Serialize};

/// First codepoint of the Ideographic Description Characters block
const IDC_BLOCK_START: u32 = 0x2FF0;
/// Last codepoint of the Ideographic Description Characters block
const IDC_BLOCK_END: u32 = 0x2FFF;
/// IDEOGRAPHIC DESCRIPTION CHARACTER SUBTRACTION, outside the main block
const IDC_SUBTRACTION: char = '\u{31EF}';

/// Composition operator of an Ideographic Description Sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdsOperator {
    /// ⿰ left to right
    #[serde(rename = "⿰")]
    LeftToRight,
    /// ⿱ above to below
    #[serde(rename = "⿱")]
    AboveToBelow,
    /// ⿲ left to middle and right
    #[serde(rename = "⿲")]
    LeftToMiddleToRight,
    /// ⿳ above to middle and below
    #[serde(rename = "⿳")]
    AboveToMiddleToBelow,
    /// ⿴ full surround
    #[serde(rename = "⿴")]
    FullSurround,
    /// ⿵ surround from above
    #[serde(rename = "⿵")]
    SurroundFromAbove,
    /// ⿶ surround from below
    #[serde(rename = "⿶")]
    SurroundFromBelow,
    /// ⿷ surround from left
    #[serde(rename = "⿷")]
    SurroundFromLeft,
    /// ⿸ surround from upper left
    #[serde(rename = "⿸")]
    SurroundFromUpperLeft,
    /// ⿹ surround from upper right
    #[serde(rename = "⿹")]
    SurroundFromUpperRight,
    /// ⿺ surround from lower left
    #[serde(rename = "⿺")]
    SurroundFromLowerLeft,
    /// ⿻ overlaid
    #[serde(rename = "⿻")]
    Overlaid,
}

impl IdsOperator {
    /// Map a glyph to its operator, if it is one of the twelve supported ones
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '⿰' => Some(IdsOperator::LeftToRight),
            '⿱' => Some(IdsOperator::AboveToBelow),
            '⿲' => Some(IdsOperator::LeftToMiddleToRight),
            '⿳' => Some(IdsOperator::AboveToMiddleToBelow),
            '⿴' => Some(IdsOperator::FullSurround),
            '⿵' => Some(IdsOperator::SurroundFromAbove),
            '⿶' => Some(IdsOperator::SurroundFromBelow),
            '⿷' => Some(IdsOperator::SurroundFromLeft),
            '⿸' => Some(IdsOperator::SurroundFromUpperLeft),
            '⿹' => Some(IdsOperator::SurroundFromUpperRight),
            '⿺' => Some(IdsOperator::SurroundFromLowerLeft),
            '⿻' => Some(IdsOperator::Overlaid),
            _ => None,
        }
    }

    /// The operator glyph
    pub fn symbol(&self) -> char {
        match self {
            IdsOperator::LeftToRight => '⿰',
            IdsOperator::AboveToBelow => '⿱',
            IdsOperator::LeftToMiddleToRight => '⿲',
            IdsOperator::AboveToMiddleToBelow => '⿳',
            IdsOperator::FullSurround => '⿴',
            IdsOperator::SurroundFromAbove => '⿵',
            IdsOperator::SurroundFromBelow => '⿶',
            IdsOperator::SurroundFromLeft => '⿷',
            IdsOperator::SurroundFromUpperLeft => '⿸',
            IdsOperator::SurroundFromUpperRight => '⿹',
            IdsOperator::SurroundFromLowerLeft => '⿺',
            IdsOperator::Overlaid => '⿻',
        }
    }

    /// Number of components the operator takes
    pub fn arity(&self) -> usize {
        match self {
            IdsOperator::LeftToMiddleToRight | IdsOperator::AboveToMiddleToBelow => 3,
            _ => 2,
        }
    }

    /// All supported operators
    pub fn all_variants() -> &'static [IdsOperator] {
        &[
            IdsOperator::LeftToRight,
            IdsOperator::AboveToBelow,
            IdsOperator::LeftToMiddleToRight,
            IdsOperator::AboveToMiddleToBelow,
            IdsOperator::FullSurround,
            IdsOperator::SurroundFromAbove,
            IdsOperator::SurroundFromBelow,
            IdsOperator::SurroundFromLeft,
            IdsOperator::SurroundFromUpperLeft,
            IdsOperator::SurroundFromUpperRight,
            IdsOperator::SurroundFromLowerLeft,
            IdsOperator::Overlaid,
        ]
    }
}

/// True for glyphs that are description characters but not one of the
/// twelve supported operators (the Unicode 15.1 additions U+2FFC..U+2FFF
/// and U+31EF).
pub fn is_unsupported_description_char(c: char) -> bool {
    if IdsOperator::from_char(c).is_some() {
        return false;
    }
    let cp = c as u32;
    (IDC_BLOCK_START..=IDC_BLOCK_END).contains(&cp) || c == IDC_SUBTRACTION
}

impl std::fmt::Display for IdsOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
