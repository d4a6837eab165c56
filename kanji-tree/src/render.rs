//! Plain-text debug dump of a decomposition tree

use crate::resolver::DecompositionTreeNode;
use std::fmt::Write;

/// One line per node, indented two spaces per level
///
/// ```text
/// 海
///   氵 (left) [radical]
///   每 (right)
/// ```
pub fn dump_tree(root: &DecompositionTreeNode) -> String {
    let mut out = String::new();
    for (node, depth) in root.walk() {
        // Writing to a String cannot fail
        let _ = write!(out, "{:indent$}{}", "", node.character, indent = depth * 2);
        if let Some(position) = node.position {
            let _ = write!(out, " ({})", position);
        }
        if node.is_radical {
            out.push_str(" [radical]");
        }
        out.push('\n');
    }
    out
}
