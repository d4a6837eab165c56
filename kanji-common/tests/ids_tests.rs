//! Integration tests for IDS cleaning, parsing and flattening

use kanji_common::ids::{
    clean_ids, flatten, parse_ids, positions_for, IdsNode, IdsOperator, ParseError, Position,
};

/// Sample of real Unihan-style sequences, with annotations
const SAMPLES: &[&str] = &[
    "⿰氵每[G]",
    "⿱一⿰丿𠃌",
    "⿰木⿱木木",
    "⿲彳圭亍[GTJKV]",
    "⿳亠口⿰冂口",
    "⿴囗玉",
    "⿵門口",
    "⿶凵乂",
    "⿷匚斤",
    "⿸广⿱廿灬",
    "⿹气米",
    "⿺辶⿰首寸",
    "⿻十八",
];

fn count_nodes(node: &IdsNode) -> (usize, usize) {
    match node {
        IdsNode::Leaf { .. } => (1, 0),
        IdsNode::Operator { operator, children } => {
            assert_eq!(children.len(), operator.arity(), "arity of {}", operator);
            children.iter().fold((0, 1), |(leaves, ops), child| {
                let (l, o) = count_nodes(child);
                (leaves + l, ops + o)
            })
        }
    }
}

#[test]
fn test_parse_consumes_exactly_the_input() {
    for raw in SAMPLES {
        let cleaned = clean_ids(raw);
        let tree = parse_ids(cleaned).unwrap_or_else(|e| panic!("{}: {}", raw, e));

        let non_operators: Vec<char> = cleaned
            .chars()
            .filter(|c| IdsOperator::from_char(*c).is_none())
            .collect();
        assert_eq!(tree.leaves(), non_operators, "leaves of {}", raw);
    }
}

#[test]
fn test_every_operator_has_declared_arity() {
    for raw in SAMPLES {
        let tree = parse_ids(clean_ids(raw)).unwrap();
        let (leaves, operators) = count_nodes(&tree);
        assert_eq!(leaves + operators, clean_ids(raw).chars().count());
    }
}

#[test]
fn test_flatten_labels_come_from_parent_slot() {
    for raw in SAMPLES {
        let tree = parse_ids(clean_ids(raw)).unwrap();
        let components = flatten(&tree);
        assert_eq!(components.len(), tree.leaves().len());
    }

    let tree = parse_ids("⿺辶⿰首寸").unwrap();
    let labels: Vec<Position> = flatten(&tree).iter().map(|c| c.position).collect();
    assert_eq!(labels, vec![Position::SurroundOuter, Position::Left, Position::Right]);
}

#[test]
fn test_truncation_at_every_point_fails() {
    // Every sample is operator-rooted, so each proper prefix is short a component
    for raw in SAMPLES {
        let cleaned: Vec<char> = clean_ids(raw).chars().collect();
        for cut in 1..cleaned.len() {
            let prefix: String = cleaned[..cut].iter().collect();
            match parse_ids(&prefix) {
                Err(ParseError::ArityMismatch { .. }) => {}
                other => panic!("prefix '{}' of {}: {:?}", prefix, raw, other),
            }
        }
    }
}

#[test]
fn test_trailing_garbage_fails() {
    for raw in SAMPLES {
        let extended = format!("{}口", clean_ids(raw));
        assert!(matches!(
            parse_ids(&extended),
            Err(ParseError::IncompleteConsumption { .. })
        ));
    }
}

#[test]
fn test_positions_table_is_total() {
    for op in IdsOperator::all_variants() {
        let labels = positions_for(*op);
        assert_eq!(labels.len(), op.arity());
        if ('⿴'..='⿺').contains(&op.symbol()) {
            assert_eq!(labels, &[Position::SurroundOuter, Position::SurroundInner]);
        }
    }
}
