// Composition tests: verifying that the modules chain together correctly.
//
// These tests exercise the data flow:
//   raw text -> clean_lines -> GroupingEngine -> report / JSON
// without touching stdin (report writing goes to the temp directory).

use std::fs;

use phrase_grouper::config::{Config, GroupingConfig};
use phrase_grouper::grouping::engine::{Cluster, GroupingEngine};
use phrase_grouper::input::{clean_lines, load_phrases};
use phrase_grouper::output::report::{format_report, write_report};

const UPLOAD: &str = "\
red apple
red pear

red apple
   blue car
Blue Car
";

// ============================================================
// Chain: raw text -> cleaned phrases -> groups -> report
// ============================================================

#[test]
fn upload_to_report_text() {
    let phrases = clean_lines(UPLOAD);
    assert_eq!(phrases, vec!["red apple", "red pear", "blue car", "Blue Car"]);

    let engine = GroupingEngine::new(GroupingConfig::new(0.8, 1).unwrap());
    let clusters = engine.group_phrases(&phrases);

    let report = format_report(&clusters);
    assert_eq!(
        report,
        "Similarity group based on: apple, pear, red\n  - red apple\n  - red pear\n\n\
         Similarity group based on: blue, car\n  - blue car\n  - Blue Car\n\n"
    );
}

#[test]
fn file_to_written_report() {
    let dir = std::env::temp_dir().join(format!("phrase-grouper-test-{}", std::process::id()));
    let input_path = dir.join("answers.txt");
    let report_path = dir.join("nested").join("groups.txt");
    fs::create_dir_all(&dir).unwrap();
    fs::write(&input_path, UPLOAD).unwrap();

    let phrases = load_phrases(&input_path).unwrap();
    let clusters = GroupingEngine::default().group_phrases(&phrases);

    let written = write_report(&clusters, &report_path).unwrap();
    assert_eq!(written, report_path.display().to_string());

    let contents = fs::read_to_string(&report_path).unwrap();
    assert_eq!(contents, format_report(&clusters));
    // Default min of 2: "blue car" / "Blue Car" share both words
    assert!(contents.contains("  - blue car\n  - Blue Car\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn clusters_round_trip_through_json() {
    let clusters = GroupingEngine::default().group_phrases(&clean_lines(UPLOAD));
    let json = serde_json::to_string(&clusters).unwrap();
    let back: Vec<Cluster> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, clusters);
    assert!(json.contains("\"keywords\""));
    assert!(json.contains("\"phrases\""));
}

#[test]
fn config_lookup_feeds_engine() {
    let config = Config::from_lookup(|key| match key {
        "GROUPER_SIMILARITY_THRESHOLD" => Some("0.8".to_string()),
        "GROUPER_MIN_SIMILAR_WORDS" => Some("1".to_string()),
        _ => None,
    })
    .unwrap();
    let engine = GroupingEngine::new(config.grouping(None, None).unwrap());
    let clusters = engine.group_phrases(&["red apple", "red pear", "blue car"]);
    assert_eq!(clusters.len(), 2);
}

#[test]
fn invalid_config_never_reaches_engine() {
    let config = Config::from_lookup(|_| None).unwrap();
    assert!(config.grouping(Some(2.0), None).is_err());
    assert!(config.grouping(None, Some(0)).is_err());
}

#[test]
fn cr_only_upload_groups_line_by_line() {
    let phrases = clean_lines("red apple\rred pear\rblue car\r");
    let engine = GroupingEngine::new(GroupingConfig::new(0.8, 1).unwrap());
    let clusters = engine.group_phrases(&phrases);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].phrases, vec!["red apple", "red pear"]);
    assert_eq!(clusters[1].phrases, vec!["blue car"]);
}

#[test]
fn bad_word_count_setting_leaves_threshold_readable() {
    // `score` only needs the threshold, so a bad word count must not block it
    let config = Config::from_lookup(|key| match key {
        "GROUPER_SIMILARITY_THRESHOLD" => Some("0.6".to_string()),
        "GROUPER_MIN_SIMILAR_WORDS" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.similarity_threshold, 0.6);
    assert!(config.grouping(None, None).is_err());
}
