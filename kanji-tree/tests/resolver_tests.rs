//! Integration tests for tree resolution and the radical cross-reference

mod helpers;

use helpers::{resources_with, sample_resources};
use kanji_common::ids::Position;
use kanji_tree::{DecompositionTreeNode, RawRecord};

#[test]
fn test_sea_resolves_to_two_levels() {
    let resources = resources_with(vec![RawRecord::new("U+6D77", '海', "⿰氵每")]);
    let tree = resources.resolve('海').unwrap();

    assert_eq!(tree.character, '海');
    assert!(!tree.is_leaf);
    assert_eq!(tree.children.len(), 2);

    let water = &tree.children[0];
    assert_eq!(water.character, '氵');
    assert_eq!(water.position, Some(Position::Left));
    assert!(water.is_leaf);
    assert!(water.is_radical, "氵 is a variant of 水");

    let every = &tree.children[1];
    assert_eq!(every.character, '每');
    assert_eq!(every.position, Some(Position::Right));
    assert!(every.is_leaf);
    assert!(!every.is_radical);
}

#[test]
fn test_absent_character_is_single_leaf() {
    let resources = sample_resources();
    let tree = resources.resolve('龘').unwrap();
    assert_eq!(tree, DecompositionTreeNode::leaf('龘', None, false));
}

#[test]
fn test_failed_parse_resolves_as_leaf() {
    let resources = sample_resources();
    let tree = resources.resolve('平').unwrap();
    assert!(tree.is_leaf);
    assert!(resources.database().parse_failures().contains_key(&'平'));
}

#[test]
fn test_multi_level_expansion() {
    let resources = sample_resources();
    let tree = resources.resolve('森').unwrap();

    assert_eq!(tree.children[0].character, '木');
    assert_eq!(tree.children[0].position, Some(Position::Top));
    assert!(tree.children[0].is_radical);

    let grove = &tree.children[1];
    assert_eq!(grove.character, '林');
    assert_eq!(grove.position, Some(Position::Bottom));
    assert!(!grove.is_leaf);
    assert!(grove.children.iter().all(|c| c.character == '木' && c.is_leaf));
}

#[test]
fn test_nested_ids_positions_are_parent_relative() {
    let resources = sample_resources();
    let tree = resources.resolve('品').unwrap();
    let positions: Vec<Position> = tree.children.iter().filter_map(|c| c.position).collect();
    assert_eq!(positions, vec![Position::Top, Position::Left, Position::Right]);
}

#[test]
fn test_ternary_and_surround_positions() {
    let resources = sample_resources();

    let street = resources.resolve('街').unwrap();
    let positions: Vec<Position> = street.children.iter().filter_map(|c| c.position).collect();
    assert_eq!(positions, vec![Position::Left, Position::Middle, Position::Right]);

    let turn = resources.resolve('回').unwrap();
    assert_eq!(turn.children[0].position, Some(Position::SurroundOuter));
    assert_eq!(turn.children[1].position, Some(Position::SurroundInner));
}

#[test]
fn test_cycles_terminate() {
    let resources = resources_with(vec![
        RawRecord::new("U+1", '甲', "⿰乙丙"),
        RawRecord::new("U+2", '乙', "⿱丙甲"),
        RawRecord::new("U+3", '丙', "⿰乙口"),
    ]);

    for c in ['甲', '乙', '丙'] {
        let tree = resources.resolve(c).unwrap();
        assert!(tree.walk().count() < 50, "tree for {} should be finite and small", c);
        // The root never reappears as an expanded node
        assert!(tree
            .walk()
            .skip(1)
            .filter(|(n, _)| n.character == c)
            .all(|(n, _)| n.is_leaf));
    }
}

#[test]
fn test_repeated_component_expands_once() {
    let resources = resources_with(vec![
        RawRecord::new("U+6797", '林', "⿰木木"),
        RawRecord::new("U+6728", '木', "⿻十八"),
    ]);
    let tree = resources.resolve('林').unwrap();

    assert_eq!(tree.children[0].children.len(), 2);
    assert!(tree.children[1].is_leaf, "second 木 is already visited");

    let metrics = resources.metrics('林').unwrap();
    assert_eq!(metrics.size, 5);
    assert_eq!(metrics.leaf_count, 3);
    assert_eq!(metrics.depth, 3);
}

#[test]
fn test_decomposable_radical_keeps_radical_flag() {
    let resources = resources_with(vec![
        RawRecord::new("U+6797", '林', "⿰木木"),
        RawRecord::new("U+6728", '木', "⿻十八"),
    ]);

    let tree = resources.resolve('木').unwrap();
    assert!(!tree.is_leaf);
    assert!(tree.is_radical);
    assert_eq!(resources.metrics('木').unwrap().radical_count, 1);

    let grove = resources.resolve('林').unwrap();
    let inner = &grove.children[0];
    assert_eq!(inner.character, '木');
    assert!(!inner.is_leaf);
    assert!(inner.is_radical);
    assert_eq!(resources.metrics('林').unwrap().radical_count, 1);
}

#[test]
fn test_queries_do_not_share_state() {
    let resources = sample_resources();
    let first = resources.resolve('林').unwrap();
    let _ = resources.resolve('森').unwrap();
    let again = resources.resolve('林').unwrap();
    assert_eq!(first, again);
}

#[test]
fn test_radicals_using_canonical_and_variant() {
    let resources = sample_resources();

    let water = resources.radicals_using('水').unwrap();
    assert_eq!(water.radical_id, 85);
    assert_eq!(water.name, "KANGXI RADICAL WATER");
    assert_eq!(water.kanji_using.len(), 2);
    let sea = water.kanji_using[&'海'];
    assert_eq!(sea.position, Position::Left);
    assert_eq!(sea.form, '氵');

    let by_variant = resources.radicals_using('氵').unwrap();
    assert_eq!(by_variant, water);

    let heart = resources.radicals_using('忄').unwrap();
    assert!(heart.kanji_using.contains_key(&'性'));
}

#[test]
fn test_radicals_using_first_occurrence() {
    let resources = sample_resources();
    let tree = resources.radicals_using('木').unwrap();
    assert_eq!(tree.kanji_using[&'林'].position, Position::Left);
    assert_eq!(tree.kanji_using[&'森'].position, Position::Top);
}

#[test]
fn test_radicals_using_unknown_glyph() {
    let resources = sample_resources();
    assert!(resources.radicals_using('每').is_none());
    // Known radical with no users still has an entry
    let one = resources.radicals_using('一').unwrap();
    assert!(one.kanji_using.is_empty());
}
