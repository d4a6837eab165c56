//! Shared fixtures for kanji-tree integration tests

#![allow(dead_code)]

use kanji_common::config::MetricsConfig;
use kanji_common::radicals::KangxiRadical;
use kanji_tree::{KanjiResources, RawRecord};
use std::path::{Path, PathBuf};

pub fn radical(number: u32, glyph: char, name: &str, strokes: u32, variants: &[&str]) -> KangxiRadical {
    let cp = 0x2F00 + number - 1;
    KangxiRadical {
        number,
        kangxi_radical: char::from_u32(cp).expect("Kangxi block codepoint"),
        radical: glyph,
        code: format!("U+{:04X}", cp),
        english_name: format!("KANGXI RADICAL {}", name.to_uppercase()),
        meaning: name.to_string(),
        strokes,
        variants: variants.iter().map(|v| v.to_string()).collect(),
        notes: String::new(),
    }
}

/// Small radical list: one, mouth, tree, heart, water
pub fn sample_radicals() -> Vec<KangxiRadical> {
    vec![
        radical(1, '一', "one", 1, &[]),
        radical(30, '口', "mouth", 3, &[]),
        radical(61, '心', "heart", 4, &["忄", "⺗"]),
        radical(75, '木', "tree", 4, &[]),
        radical(85, '水', "water", 4, &["氵", "氺"]),
    ]
}

/// Decomposition records exercising nesting, atomics and a parse failure
pub fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new("U+4E00", '一', "一"),
        RawRecord::new("U+6D77", '海', "⿰氵每[G]"),
        RawRecord::new("U+6797", '林', "⿰木木"),
        RawRecord::new("U+68EE", '森', "⿱木林"),
        RawRecord::new("U+6CD5", '法', "⿰氵去"),
        RawRecord::new("U+53BB", '去', "⿱土厶"),
        RawRecord::new("U+6027", '性', "⿰忄生"),
        RawRecord::new("U+56DE", '回', "⿴口口"),
        RawRecord::new("U+54C1", '品', "⿱口⿰口口"),
        RawRecord::new("U+8857", '街', "⿲彳圭亍"),
        RawRecord::new("U+5E73", '平', "⿱一"),
    ]
}

pub fn settings() -> MetricsConfig {
    MetricsConfig::default()
}

pub fn sample_resources() -> KanjiResources {
    KanjiResources::from_parts(sample_records(), sample_radicals(), settings())
}

pub fn resources_with(records: Vec<RawRecord>) -> KanjiResources {
    KanjiResources::from_parts(records, sample_radicals(), settings())
}

/// Serialize the sample radicals in reference-file format
pub fn radicals_json(radicals: &[KangxiRadical]) -> String {
    serde_json::to_string_pretty(radicals).expect("serialize radicals")
}

/// Write the sample inputs to `dir`, returning (ids path, radicals path)
pub fn write_sample_files(dir: &Path) -> (PathBuf, PathBuf) {
    let ids_path = dir.join("ids.txt");
    let mut ids = String::from("# codepoint\tcharacter\tIDS\n\n");
    for record in sample_records() {
        ids.push_str(&format!("{}\t{}\t{}\n", record.codepoint, record.character, record.raw_ids));
    }
    std::fs::write(&ids_path, ids).expect("write ids fixture");

    let radicals_path = dir.join("kangxi_radicals.json");
    std::fs::write(&radicals_path, radicals_json(&sample_radicals())).expect("write radicals fixture");

    (ids_path, radicals_path)
}
