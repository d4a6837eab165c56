//! Component position labels
//!
//! Each operator assigns one label per child slot. A leaf's position is
//! always the label of its direct parent's slot; labels of enclosing
//! operators are not combined.

use super::operator::IdsOperator;
use super::parser::IdsNode;
use serde::{Deserialize, Serialize};

/// Position of a component relative to its immediate parent operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Left,
    Right,
    Top,
    Bottom,
    /// Centre slot of a three-way split (either direction)
    Middle,
    /// Enclosing part of a surround operator
    SurroundOuter,
    /// Enclosed part of a surround operator
    SurroundInner,
    /// First operand of ⿻
    OverlapBase,
    /// Second operand of ⿻, drawn over the first
    OverlapOverlay,
}

impl Position {
    pub fn label(&self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::Middle => "middle",
            Position::SurroundOuter => "surround-outer",
            Position::SurroundInner => "surround-inner",
            Position::OverlapBase => "overlap-base",
            Position::OverlapOverlay => "overlap-overlay",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

const LEFT_RIGHT: &[Position] = &[Position::Left, Position::Right];
const TOP_BOTTOM: &[Position] = &[Position::Top, Position::Bottom];
const LEFT_MIDDLE_RIGHT: &[Position] = &[Position::Left, Position::Middle, Position::Right];
const TOP_MIDDLE_BOTTOM: &[Position] = &[Position::Top, Position::Middle, Position::Bottom];
const OUTER_INNER: &[Position] = &[Position::SurroundOuter, Position::SurroundInner];
const BASE_OVERLAY: &[Position] = &[Position::OverlapBase, Position::OverlapOverlay];

/// Ordered slot labels for an operator; length always equals `arity()`
///
/// Every surround operator lists the enclosing component first, matching
/// the Unicode IDS ordering.
pub fn positions_for(operator: IdsOperator) -> &'static [Position] {
    match operator {
        IdsOperator::LeftToRight => LEFT_RIGHT,
        IdsOperator::AboveToBelow => TOP_BOTTOM,
        IdsOperator::LeftToMiddleToRight => LEFT_MIDDLE_RIGHT,
        IdsOperator::AboveToMiddleToBelow => TOP_MIDDLE_BOTTOM,
        IdsOperator::FullSurround
        | IdsOperator::SurroundFromAbove
        | IdsOperator::SurroundFromBelow
        | IdsOperator::SurroundFromLeft
        | IdsOperator::SurroundFromUpperLeft
        | IdsOperator::SurroundFromUpperRight
        | IdsOperator::SurroundFromLowerLeft => OUTER_INNER,
        IdsOperator::Overlaid => BASE_OVERLAY,
    }
}

/// A leaf component with the slot it occupies in its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedComponent {
    pub component: char,
    pub position: Position,
}

impl PositionedComponent {
    pub fn new(component: char, position: Position) -> Self {
        Self { component, position }
    }
}

/// Flatten a parsed tree into its positioned leaves, depth-first
///
/// A bare leaf root has no parent slot and flattens to an empty list: the
/// character is atomic.
pub fn flatten(node: &IdsNode) -> Vec<PositionedComponent> {
    let mut out = Vec::new();
    if let IdsNode::Operator { operator, children } = node {
        flatten_into(*operator, children, &mut out);
    }
    out
}

fn flatten_into(operator: IdsOperator, children: &[IdsNode], out: &mut Vec<PositionedComponent>) {
    for (child, position) in children.iter().zip(positions_for(operator)) {
        match child {
            IdsNode::Leaf { glyph } => out.push(PositionedComponent::new(*glyph, *position)),
            IdsNode::Operator { operator, children } => flatten_into(*operator, children, out),
        }
    }
}
