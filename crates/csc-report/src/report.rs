//! Rare combination report

use crate::writer::CsvWriter;
use csc_combinations::RareCombinationRecord;
use csc_diagnostics::{CscError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Separator between labels or documents in human-readable output
pub const LIST_SEPARATOR: &str = "; ";

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub combination: Vec<String>,
    pub docs: Vec<String>,
    #[serde(rename = "# docs")]
    pub doc_count: usize,
    #[serde(rename = "# annotations")]
    pub annotation_count: usize,
}

impl From<RareCombinationRecord> for ReportRow {
    fn from(record: RareCombinationRecord) -> Self {
        Self {
            doc_count: record.doc_count(),
            annotation_count: record.size(),
            combination: record.combination,
            docs: record.documents,
        }
    }
}

/// Rare combinations sorted for presentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Sort by document count, then combination size, both descending.
    /// Rows that tie keep their extraction order.
    pub fn assemble(records: impl IntoIterator<Item = RareCombinationRecord>) -> Self {
        let mut rows: Vec<ReportRow> = records.into_iter().map(ReportRow::from).collect();
        rows.sort_by(|a, b| {
            b.doc_count
                .cmp(&a.doc_count)
                .then_with(|| b.annotation_count.cmp(&a.annotation_count))
        });
        Self { rows }
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as CSV with a header line.
    ///
    /// Label and document lists are written as JSON arrays, so a label
    /// containing a separator stays a single label.
    pub fn to_csv(&self) -> serde_json::Result<String> {
        let mut writer = CsvWriter::new();
        writer.write_record(["combination", "docs", "# docs", "# annotations"]);
        for row in &self.rows {
            writer.write_record([
                serde_json::to_string(&row.combination)?,
                serde_json::to_string(&row.docs)?,
                row.doc_count.to_string(),
                row.annotation_count.to_string(),
            ]);
        }
        Ok(writer.into_string())
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Write the CSV rendering to
    /// `<output_dir>/<experiment>/rare_combinations_<depth>_anns_<threshold>_docs.csv`
    pub fn save_csv(
        &self,
        output_dir: impl AsRef<Path>,
        experiment: &str,
        max_depth: usize,
        rarity_threshold: usize,
    ) -> Result<PathBuf> {
        let dir = output_dir.as_ref().join(experiment);
        fs::create_dir_all(&dir).map_err(|e| CscError::io(&e, &dir))?;

        let path = dir.join(file_name(max_depth, rarity_threshold));
        let content = self
            .to_csv()
            .map_err(|e| CscError::io(&std::io::Error::other(e), &path))?;
        fs::write(&path, content).map_err(|e| CscError::io(&e, &path))?;

        tracing::info!(rows = self.len(), path = %path.display(), "report saved");
        Ok(path)
    }
}

/// File name of a saved report
pub fn file_name(max_depth: usize, rarity_threshold: usize) -> String {
    format!("rare_combinations_{max_depth}_anns_{rarity_threshold}_docs.csv")
}
