//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use csc_report::{CsvWriter, IndexSummary, LIST_SEPARATOR, Report};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
    JsonPretty,
    Table,
}

impl OutputFormat {
    /// Parse a user-supplied format name, falling back to `default`
    pub fn parse(s: Option<&str>, default: Self) -> Self {
        match s.map(str::to_lowercase).as_deref() {
            Some("csv") => Self::Csv,
            Some("json") => Self::Json,
            Some("pretty") | Some("json-pretty") => Self::JsonPretty,
            Some("table") => Self::Table,
            _ => default,
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(std::io::stderr().is_terminal()),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content.trim_end_matches('\n'));
    }
    Ok(())
}

#[derive(Tabled)]
struct ReportLine {
    #[tabled(rename = "Combination")]
    combination: String,
    #[tabled(rename = "# docs")]
    doc_count: usize,
    #[tabled(rename = "# annotations")]
    annotation_count: usize,
    #[tabled(rename = "Documents")]
    docs: String,
}

/// Render a report in `format`
pub fn render_report(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => report.to_csv().context("Failed to serialize CSV"),
        OutputFormat::Json => report.to_json(false).context("Failed to serialize JSON"),
        OutputFormat::JsonPretty => report.to_json(true).context("Failed to serialize JSON"),
        OutputFormat::Table => {
            if report.is_empty() {
                return Ok("(no rare combination)".to_string());
            }
            let lines = report.rows().iter().map(|row| ReportLine {
                combination: row.combination.join(LIST_SEPARATOR),
                doc_count: row.doc_count,
                annotation_count: row.annotation_count,
                docs: row.docs.join(LIST_SEPARATOR),
            });
            Ok(Table::new(lines).with(Style::modern()).to_string())
        }
    }
}

#[derive(Tabled)]
struct SupportLine {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "# docs")]
    documents: usize,
}

/// Render an index summary in `format`
pub fn render_summary(summary: &IndexSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(summary).context("Failed to serialize JSON"),
        OutputFormat::JsonPretty => {
            serde_json::to_string_pretty(summary).context("Failed to serialize JSON")
        }
        OutputFormat::Csv => {
            let mut writer = CsvWriter::new();
            writer.write_record(["label", "# docs"]);
            for support in &summary.supports {
                writer.write_record([support.label.clone(), support.documents.to_string()]);
            }
            Ok(writer.into_string())
        }
        OutputFormat::Table => {
            let header = format!(
                "{} documents, {} distinct labels",
                summary.documents, summary.labels
            );
            let lines = summary.supports.iter().map(|s| SupportLine {
                label: s.label.clone(),
                documents: s.documents,
            });
            Ok(format!(
                "{}\n{}",
                header,
                Table::new(lines).with(Style::modern())
            ))
        }
    }
}
