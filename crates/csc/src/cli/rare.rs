//! Rare command implementation

use super::output::{self, OutputFormat};
use crate::{AnnotationFilter, AnnotationIndex, Report, SearchConfig, search};
use anyhow::{Context, Result};
use csc_annotations::DEFAULT_STOP_LABELS;
use std::path::PathBuf;

/// Configuration for rare command
pub struct RareConfig {
    pub path: PathBuf,
    pub experiment_name: String,
    pub max_depth: usize,
    pub threshold: usize,
    pub min_support: Option<usize>,
    pub max_nodes: Option<usize>,
    pub types: Vec<String>,
    pub keep_stop_labels: bool,
    pub output_dir: PathBuf,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

impl RareConfig {
    /// Search parameters; the expansion support defaults to `threshold + 1`
    pub fn search_config(&self) -> SearchConfig {
        let config = SearchConfig::new(self.max_depth, self.threshold).with_max_nodes(self.max_nodes);
        match self.min_support {
            Some(support) => config.with_min_support_to_expand(support),
            None => config,
        }
    }

    pub fn filter(&self) -> AnnotationFilter {
        let filter_out: &[&str] = if self.keep_stop_labels {
            &[]
        } else {
            &DEFAULT_STOP_LABELS
        };
        AnnotationFilter::new(self.types.iter().cloned(), filter_out.iter().copied())
    }
}

/// Find the rare combinations of a corpus and write the report.
///
/// CSV reports go to `<output_dir>/<experiment_name>/` unless an output file
/// is given; other formats go to the output file or stdout.
pub fn run(config: RareConfig) -> Result<()> {
    let search_config = config.search_config();
    search_config
        .validate()
        .context("Invalid search parameters")?;

    tracing::info!(
        max_depth = search_config.max_depth,
        threshold = search_config.rarity_threshold,
        min_support = search_config.min_support_to_expand,
        "looking for rare combinations"
    );

    let documents = csc_annotations::load(&config.path, &config.filter())
        .with_context(|| format!("Failed to load annotations from {}", config.path.display()))?;
    let index = AnnotationIndex::build(&documents);

    tracing::info!(
        documents = index.document_count(),
        labels = index.label_count(),
        "building combination tree"
    );
    let outcome = search(&index, &search_config)?;
    if outcome.truncated {
        eprintln!(
            "{}",
            output::format_warning(&format!(
                "node budget of {} reached, some combinations were not explored",
                outcome.node_count
            ))
        );
    }
    tracing::info!(
        nodes = outcome.node_count,
        rare = outcome.records.len(),
        "combinations identified"
    );

    let report = Report::assemble(outcome.records);
    let format = OutputFormat::parse(config.output_format.as_deref(), OutputFormat::Csv);

    if format == OutputFormat::Csv && config.output_file.is_none() {
        let path = report
            .save_csv(
                &config.output_dir,
                &config.experiment_name,
                search_config.max_depth,
                search_config.rarity_threshold,
            )
            .context("Failed to save report")?;
        eprintln!(
            "{}",
            output::format_success(&format!(
                "{} rare combination(s) stored in {}",
                report.len(),
                path.display()
            ))
        );
        return Ok(());
    }

    let content = output::render_report(&report, format)?;
    output::write_output(&content, config.output_file.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RareConfig {
        RareConfig {
            path: PathBuf::from("corpus"),
            experiment_name: "exp".to_string(),
            max_depth: 3,
            threshold: 5,
            min_support: None,
            max_nodes: None,
            types: vec!["DISO".to_string()],
            keep_stop_labels: false,
            output_dir: PathBuf::from("Outputs"),
            output_format: None,
            output_file: None,
        }
    }

    #[test]
    fn test_default_expansion_support() {
        assert_eq!(config().search_config().min_support_to_expand, 6);
    }

    #[test]
    fn test_explicit_expansion_support() {
        let config = RareConfig {
            min_support: Some(5),
            ..config()
        };
        assert_eq!(config.search_config().min_support_to_expand, 5);
    }

    #[test]
    fn test_filter() {
        assert!(config().filter().drops_label("bilan"));
        let keep = RareConfig {
            keep_stop_labels: true,
            ..config()
        };
        assert!(!keep.filter().drops_label("bilan"));
        assert!(keep.filter().keeps_type("DISO"));
        assert!(!keep.filter().keeps_type("PROC"));
    }

    #[test]
    fn test_invalid_depth_fails_before_loading() {
        let config = RareConfig {
            max_depth: 0,
            path: PathBuf::from("/nonexistent/corpus"),
            ..config()
        };
        let err = run(config).unwrap_err();
        assert!(err.to_string().contains("Invalid search parameters"));
    }
}
