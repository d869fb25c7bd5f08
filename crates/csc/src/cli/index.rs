//! Index command implementation

use super::output::{self, OutputFormat};
use crate::{AnnotationFilter, AnnotationIndex};
use anyhow::{Context, Result};
use csc_report::IndexSummary;
use std::path::PathBuf;

/// Configuration for index command
pub struct IndexConfig {
    pub path: PathBuf,
    pub filter: AnnotationFilter,
    pub top: Option<usize>,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Print how many documents support each label of a corpus
pub fn run(config: IndexConfig) -> Result<()> {
    let documents = csc_annotations::load(&config.path, &config.filter)
        .with_context(|| format!("Failed to load annotations from {}", config.path.display()))?;
    let index = AnnotationIndex::build(&documents);

    let summary = IndexSummary::from_index(&index, config.top);
    let format = OutputFormat::parse(config.output_format.as_deref(), OutputFormat::Table);
    let content = output::render_summary(&summary, format)?;

    output::write_output(&content, config.output_file.as_deref())
}
