//! End-to-end runs of the command implementations

#![cfg(feature = "cli")]

use csc::cli::{index, rare};
use csc::AnnotationFilter;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CORPUS: &str = r#"{
    "d1": ["fièvre", "toux"],
    "d2": ["fièvre", "toux"],
    "d3": ["fièvre", "toux", "éruption"],
    "d4": ["fièvre", "éruption"]
}"#;

fn corpus(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("corpus.json");
    fs::write(&path, CORPUS).unwrap();
    path
}

fn rare_config(path: &Path, output_dir: &Path) -> rare::RareConfig {
    rare::RareConfig {
        path: path.to_path_buf(),
        experiment_name: "trial".to_string(),
        max_depth: 2,
        threshold: 1,
        min_support: None,
        max_nodes: None,
        types: vec!["DISO".to_string()],
        keep_stop_labels: false,
        output_dir: output_dir.to_path_buf(),
        output_format: None,
        output_file: None,
    }
}

#[test]
fn test_rare_writes_csv_report() {
    let dir = TempDir::new().unwrap();
    let path = corpus(&dir);
    let out = dir.path().join("Outputs");

    rare::run(rare_config(&path, &out)).unwrap();

    let report = out.join("trial").join("rare_combinations_2_anns_1_docs.csv");
    assert_eq!(
        fs::read_to_string(report).unwrap(),
        "combination,docs,# docs,# annotations\n\"[\"\"toux\"\",\"\"éruption\"\"]\",\"[\"\"d3\"\"]\",1,2\n"
    );
}

#[rstest]
#[case::compact("json")]
#[case::pretty("pretty")]
fn test_rare_json_to_output_file(#[case] format: &str) {
    let dir = TempDir::new().unwrap();
    let path = corpus(&dir);
    let target = dir.path().join("nested").join("report.json");

    let config = rare::RareConfig {
        output_format: Some(format.to_string()),
        output_file: Some(target.clone()),
        ..rare_config(&path, dir.path())
    };
    rare::run(config).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(target).unwrap()).unwrap();
    assert_eq!(json[0]["combination"], serde_json::json!(["toux", "éruption"]));
    assert_eq!(json[0]["docs"], serde_json::json!(["d3"]));
    assert_eq!(json[0]["# docs"], 1);
    assert!(!dir.path().join("trial").exists());
}

#[rstest]
#[case::stop_labels_dropped(false, "label,# docs\nfièvre,4\ntoux,3\n")]
#[case::stop_labels_kept(true, "label,# docs\nbilan,4\nfièvre,4\ntoux,3\n")]
fn test_index_stop_labels_on_json(#[case] keep_stop_labels: bool, #[case] expected: &str) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corpus.json");
    fs::write(
        &path,
        r#"{"d1": ["fièvre", "toux", "bilan"], "d2": ["fièvre", "toux", "bilan"], "d3": ["fièvre", "toux", "bilan"], "d4": ["fièvre", "bilan"]}"#,
    )
    .unwrap();
    let target = dir.path().join("labels.csv");

    let filter = if keep_stop_labels {
        AnnotationFilter::types_only(["DISO"])
    } else {
        AnnotationFilter::default()
    };
    let config = index::IndexConfig {
        path,
        filter,
        top: Some(3),
        output_format: Some("csv".to_string()),
        output_file: Some(target.clone()),
    };
    index::run(config).unwrap();

    assert_eq!(fs::read_to_string(target).unwrap(), expected);
}

#[test]
fn test_rare_missing_corpus() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent");

    let err = rare::run(rare_config(&missing, dir.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to load annotations"));
}
