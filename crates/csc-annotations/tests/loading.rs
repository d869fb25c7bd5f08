//! Loading corpora from disk

use csc_annotations::{AnnotationFilter, flatten, load, load_folder};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).unwrap();
}

fn corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "file-2.ann",
        "T1\tDISO 0 6\tfièvre\nT2\tCHEM 10 21\tparacétamol\nT3\tPROC 30 35\tbilan\n",
    );
    write(
        &dir,
        "file-1.ann",
        "T1\tDISO 0 12\tinsuffisance\nT2\tDISO 0 19\tinsuffisance rénale\nR1\tCauses Arg1:T1 Arg2:T2\nT3\tPROC 25 32\tdialyse\n",
    );
    write(&dir, "notes.txt", "not an annotation file");
    dir
}

#[test]
fn test_folder_sorted_by_document_id() {
    let dir = corpus();
    let docs = load_folder(dir.path(), &AnnotationFilter::default()).unwrap();

    assert_eq!(docs.keys().cloned().collect::<Vec<_>>(), vec!["file-1", "file-2"]);
    assert_eq!(docs["file-1"], vec!["insuffisance rénale", "dialyse"]);
    assert_eq!(docs["file-2"], vec!["fièvre", "paracétamol"]);
}

#[rstest]
#[case::all_types(vec!["PROC", "DISO", "CHEM"], vec!["dialyse", "fièvre", "insuffisance rénale", "paracétamol"])]
#[case::chemicals(vec!["CHEM"], vec!["paracétamol"])]
#[case::procedures(vec!["PROC"], vec!["dialyse"])]
fn test_type_selection(#[case] types: Vec<&str>, #[case] expected: Vec<&str>) {
    let dir = corpus();
    let filter = AnnotationFilter::new(types, ["bilan"]);
    let docs = load(dir.path(), &filter).unwrap();

    assert_eq!(flatten(&docs).into_iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_json_mapping() {
    let dir = TempDir::new().unwrap();
    write(&dir, "docs.json", r#"{"b": ["x", "y"], "a": ["y"]}"#);

    let docs = load(dir.path().join("docs.json"), &AnnotationFilter::default()).unwrap();
    assert_eq!(docs.keys().cloned().collect::<Vec<_>>(), vec!["b", "a"]);
}

#[test]
fn test_single_ann_file() {
    let dir = corpus();
    let docs = load(dir.path().join("file-2.ann"), &AnnotationFilter::default()).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs["file-2"], vec!["fièvre", "paracétamol"]);
}

#[test]
fn test_unsupported_extension() {
    let dir = corpus();
    let err = load(dir.path().join("notes.txt"), &AnnotationFilter::default()).unwrap_err();
    assert!(err.code().is_input_error());
}

#[test]
fn test_missing_folder() {
    let dir = TempDir::new().unwrap();
    let err = load_folder(dir.path().join("absent"), &AnnotationFilter::default()).unwrap_err();
    assert!(err.code().is_system_error());
}

#[test]
fn test_malformed_json() {
    let dir = TempDir::new().unwrap();
    write(&dir, "docs.json", r#"{"a": "not a list"}"#);

    let err = load(dir.path().join("docs.json"), &AnnotationFilter::default()).unwrap_err();
    assert!(err.code().is_input_error());
    assert!(err.path().is_some());
}

#[rstest]
#[case::stop_labels_dropped(AnnotationFilter::default(), vec!["toux"])]
#[case::stop_labels_kept(AnnotationFilter::types_only(["DISO"]), vec!["bilan", "toux"])]
fn test_json_stop_labels(#[case] filter: AnnotationFilter, #[case] expected: Vec<&str>) {
    let dir = TempDir::new().unwrap();
    write(&dir, "docs.json", r#"{"d1": ["bilan", "toux"]}"#);

    let docs = load(dir.path().join("docs.json"), &filter).unwrap();
    assert_eq!(docs["d1"], expected);
}
