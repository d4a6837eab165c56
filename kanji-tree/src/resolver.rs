//! Recursive decomposition tree resolver
//!
//! Expands a character into its full multi-level decomposition by
//! following each component's own database entry. The expansion uses an
//! explicit work stack, so deep data cannot overflow the call stack.
//!
//! Every character met during one top-level call is marked visited, and
//! any later occurrence of it in the same call becomes a leaf. Cycles and
//! shared sub-structures therefore expand at most once, so the tree stays
//! linear in the number of distinct characters. The visited set lives only
//! for one top-level call and the database is never touched.

use crate::db::KanjiDatabase;
use kanji_common::ids::{Position, PositionedComponent};
use kanji_common::radicals::{RadicalIndex, VariantIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Resolver failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The expanded tree would exceed the configured node budget
    #[error("decomposition of '{character}' exceeds {limit} nodes")]
    NodeLimitExceeded { character: char, limit: usize },
}

/// Node of a resolved decomposition tree
///
/// `is_leaf` is always `children.is_empty()`; use the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionTreeNode {
    pub character: char,
    /// Slot in the parent operator; `None` for the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub is_leaf: bool,
    pub is_radical: bool,
    pub children: Vec<DecompositionTreeNode>,
}

impl DecompositionTreeNode {
    pub fn leaf(character: char, position: Option<Position>, is_radical: bool) -> Self {
        Self {
            character,
            position,
            is_leaf: true,
            is_radical,
            children: Vec::new(),
        }
    }

    pub fn branch(
        character: char,
        position: Option<Position>,
        is_radical: bool,
        children: Vec<DecompositionTreeNode>,
    ) -> Self {
        Self {
            character,
            position,
            is_leaf: children.is_empty(),
            is_radical,
            children,
        }
    }

    /// Pre-order traversal yielding each node with its depth (root = 0)
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![(self, 0)] }
    }
}

/// Iterator returned by [`DecompositionTreeNode::walk`]
pub struct Walk<'n> {
    stack: Vec<(&'n DecompositionTreeNode, usize)>,
}

impl<'n> Iterator for Walk<'n> {
    type Item = (&'n DecompositionTreeNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        // Reversed so the leftmost child is visited first
        for child in node.children.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((node, depth))
    }
}

/// In-progress expansion of one non-atomic character
struct Frame<'a> {
    character: char,
    position: Option<Position>,
    components: &'a [PositionedComponent],
    next: usize,
    children: Vec<DecompositionTreeNode>,
}

impl<'a> Frame<'a> {
    fn new(character: char, position: Option<Position>, components: &'a [PositionedComponent]) -> Self {
        Self {
            character,
            position,
            components,
            next: 0,
            children: Vec::with_capacity(components.len()),
        }
    }
}

/// Tree resolver over the shared read-only indices
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    db: &'a KanjiDatabase,
    variants: &'a VariantIndex,
    radicals: &'a RadicalIndex,
    max_nodes: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(
        db: &'a KanjiDatabase,
        variants: &'a VariantIndex,
        radicals: &'a RadicalIndex,
        max_nodes: usize,
    ) -> Self {
        Self {
            db,
            variants,
            radicals,
            max_nodes: max_nodes.max(1),
        }
    }

    /// Whether a glyph's canonical form is a known radical
    pub fn is_radical(&self, character: char) -> bool {
        self.variants.is_radical(character, self.radicals)
    }

    /// Expand a character into its full decomposition tree
    ///
    /// Characters absent from the database, or without components, resolve
    /// to a single leaf.
    pub fn resolve(&self, character: char) -> Result<DecompositionTreeNode, ResolveError> {
        let root_components = self.db.components_of(character);
        if root_components.is_empty() {
            return Ok(DecompositionTreeNode::leaf(character, None, self.is_radical(character)));
        }

        let mut visited: HashSet<char> = HashSet::new();
        visited.insert(character);
        let mut stack = vec![Frame::new(character, None, root_components)];
        let mut node_count = 1usize;
        let mut finished = None;

        while let Some(frame) = stack.last_mut() {
            if let Some(component) = frame.components.get(frame.next).copied() {
                frame.next += 1;

                node_count += 1;
                if node_count > self.max_nodes {
                    return Err(ResolveError::NodeLimitExceeded {
                        character,
                        limit: self.max_nodes,
                    });
                }

                let glyph = component.component;
                let child_components = self.db.components_of(glyph);
                let first_visit = visited.insert(glyph);
                if !first_visit && !child_components.is_empty() {
                    debug!("'{}' already visited while resolving '{}', treating as leaf", glyph, character);
                }
                if child_components.is_empty() || !first_visit {
                    frame.children.push(DecompositionTreeNode::leaf(
                        glyph,
                        Some(component.position),
                        self.is_radical(glyph),
                    ));
                } else {
                    stack.push(Frame::new(glyph, Some(component.position), child_components));
                }
                continue;
            }

            // All components of the top frame are resolved
            let Some(done) = stack.pop() else { break };
            let node = DecompositionTreeNode::branch(
                done.character,
                done.position,
                self.is_radical(done.character),
                done.children,
            );
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => finished = Some(node),
            }
        }

        Ok(finished.unwrap_or_else(|| DecompositionTreeNode::leaf(character, None, self.is_radical(character))))
    }
}
