//! Integration tests for loading resources from disk

mod helpers;

use helpers::{radical, radicals_json, sample_radicals, settings, write_sample_files};
use kanji_common::config::DataPaths;
use kanji_tree::source::read_source;
use kanji_tree::KanjiResources;
use tempfile::TempDir;

#[test]
fn test_load_sample_files() {
    let temp_dir = TempDir::new().unwrap();
    let (ids_source, radicals) = write_sample_files(temp_dir.path());

    let resources = KanjiResources::load(&DataPaths { ids_source, radicals }, settings()).unwrap();
    assert_eq!(resources.database().len(), 11);
    assert_eq!(resources.radicals().len(), 5);
    assert!(resources.variants().is_radical('氵', resources.radicals()));
    assert_eq!(resources.database().get('海').unwrap().cleaned_ids, "⿰氵每");
    assert_eq!(resources.metrics('海').unwrap().depth, 2);
}

#[test]
fn test_read_source_skips_non_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ids.txt");
    std::fs::write(
        &path,
        "# comment\nU+6D77\t海\t⿰氵每\tignored\nnot a record\nU+6797\t林\n\nU+68EE\t森\t⿱木林\n",
    )
    .unwrap();

    let records = read_source(&path).unwrap();
    let characters: Vec<char> = records.iter().map(|r| r.character).collect();
    assert_eq!(characters, vec!['海', '森']);
}

#[test]
fn test_schema_findings_do_not_block_load() {
    let temp_dir = TempDir::new().unwrap();
    let (ids_source, radicals_path) = write_sample_files(temp_dir.path());

    // Only five of 214 radicals, plus a duplicated variant: invalid, still usable
    let mut radicals = sample_radicals();
    radicals.push(radical(86, '火', "fire", 4, &["氵"]));
    std::fs::write(&radicals_path, radicals_json(&radicals)).unwrap();

    let resources = KanjiResources::load(
        &DataPaths { ids_source, radicals: radicals_path },
        settings(),
    )
    .unwrap();
    assert_eq!(resources.radicals().len(), 6);
    assert_eq!(resources.variants().canonical_of('氵'), Some('水'));
}

#[test]
fn test_missing_source_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let (_, radicals) = write_sample_files(temp_dir.path());
    let result = KanjiResources::load(
        &DataPaths {
            ids_source: temp_dir.path().join("absent.txt"),
            radicals,
        },
        settings(),
    );
    assert!(matches!(result, Err(kanji_common::Error::Io(_))));
}

#[test]
fn test_radical_file_not_a_list_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let (ids_source, radicals) = write_sample_files(temp_dir.path());
    std::fs::write(&radicals, "{\"number\": 1}").unwrap();

    let result = KanjiResources::load(&DataPaths { ids_source, radicals }, settings());
    assert!(matches!(result, Err(kanji_common::Error::Json(_))));
}
