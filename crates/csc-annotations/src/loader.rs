//! Corpus loading
//!
//! A corpus is either a folder of `.ann` files (one document per file, named
//! after the file stem) or a JSON object mapping document ids to label lists
//! that were resolved elsewhere.

use crate::brat::parse_document;
use crate::filter::AnnotationFilter;
use crate::resolve::resolve_overlaps;
use crate::DocumentAnnotations;
use csc_diagnostics::{CSC0100, CSC0101, CscError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a corpus from a folder of `.ann` files or a `.json` mapping.
///
/// JSON label lists carry no annotation type: only the stop labels of
/// `filter` apply to them.
pub fn load(path: impl AsRef<Path>, filter: &AnnotationFilter) -> Result<DocumentAnnotations> {
    let path = path.as_ref();
    if path.is_dir() {
        return load_folder(path, filter);
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let mut documents = load_json(path)?;
            for labels in documents.values_mut() {
                labels.retain(|label| !filter.drops_label(label));
            }
            Ok(documents)
        }
        Some("ann") => {
            let mut documents = DocumentAnnotations::new();
            documents.insert(document_id(path), load_file(path, filter)?);
            Ok(documents)
        }
        Some(ext) => Err(CscError::input(
            CSC0101,
            format!("unsupported input extension .{ext}, expected a folder, .ann or .json"),
        )
        .with_path(path)),
        None if !path.exists() => Err(CscError::io(
            &std::io::Error::from(std::io::ErrorKind::NotFound),
            path,
        )),
        None => Err(CscError::input(
            CSC0101,
            "input has no extension, expected a folder, .ann or .json",
        )
        .with_path(path)),
    }
}

/// Load every `.ann` file of `dir`, sorted by document id
pub fn load_folder(dir: impl AsRef<Path>, filter: &AnnotationFilter) -> Result<DocumentAnnotations> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| CscError::io(&e, dir))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CscError::io(&e, dir))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "ann") {
            files.push(path);
        }
    }
    files.sort_by_key(|path| document_id(path));

    let mut documents = DocumentAnnotations::with_capacity(files.len());
    for file in &files {
        documents.insert(document_id(file), load_file(file, filter)?);
    }

    tracing::info!(
        documents = documents.len(),
        folder = %dir.display(),
        "annotations loaded"
    );
    Ok(documents)
}

/// Resolve the labels of a single `.ann` file
pub fn load_file(path: impl AsRef<Path>, filter: &AnnotationFilter) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| CscError::io(&e, path))?;
    let annotations = parse_document(&content);
    let labels = resolve_overlaps(&annotations, filter, None);

    tracing::debug!(
        file = %path.display(),
        annotations = annotations.len(),
        labels = labels.len(),
        "document resolved"
    );
    Ok(labels)
}

/// Load a `{document: [labels]}` JSON object, keeping its order
pub fn load_json(path: impl AsRef<Path>) -> Result<DocumentAnnotations> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| CscError::io(&e, path))?;
    let documents = parse_json(&content).map_err(|e| e.with_path(path))?;

    tracing::info!(documents = documents.len(), file = %path.display(), "annotations loaded");
    Ok(documents)
}

/// Parse a `{document: [labels]}` JSON object
pub fn parse_json(content: &str) -> Result<DocumentAnnotations> {
    serde_json::from_str(content).map_err(|e| {
        CscError::input(
            CSC0100,
            format!("expected an object of label lists: {e}"),
        )
    })
}

/// Every distinct label of the corpus
pub fn flatten(documents: &DocumentAnnotations) -> BTreeSet<String> {
    documents.values().flatten().cloned().collect()
}

fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_keeps_order() {
        let docs = parse_json(r#"{"z": ["b", "a"], "a": ["c"], "m": []}"#).unwrap();
        assert_eq!(docs.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(docs["z"], vec!["b", "a"]);
    }

    #[test]
    fn test_parse_json_rejects_other_shapes() {
        let err = parse_json(r#"["a", "b"]"#).unwrap_err();
        assert_eq!(err.code(), CSC0100);
    }

    #[test]
    fn test_flatten() {
        let docs = parse_json(r#"{"d1": ["b", "a"], "d2": ["a", "c"]}"#).unwrap();
        let labels: Vec<_> = flatten(&docs).into_iter().collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_document_id() {
        assert_eq!(document_id(Path::new("corpus/file-12.ann")), "file-12");
    }
}
