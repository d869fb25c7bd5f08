//! CSC command-line interface

use clap::{Parser, Subcommand};
use csc::AnnotationFilter;
use csc::annotations::{DEFAULT_STOP_LABELS, DEFAULT_TYPES};
use csc::cli::{index, logging, output, rare};
use std::path::PathBuf;

/// Clinical annotation co-occurrence tool
#[derive(Parser)]
#[command(name = "csc")]
#[command(author, version, about = "Rare clinical annotation combinations", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find rare combinations of annotations among documents
    Rare {
        /// Folder of .ann files, a single .ann file, or a JSON {document: [labels]} mapping
        #[arg(short, long)]
        path: PathBuf,

        /// Experiment name, used as the report sub-folder
        #[arg(short, long)]
        experiment_name: String,

        /// Maximum depth of the tree (maximum size of a combination)
        #[arg(short = 'd', long, default_value_t = 3)]
        max_depth: usize,

        /// Report combinations present in at most this many documents
        #[arg(short = 't', long = "threshold-nb-docs", default_value_t = 5)]
        threshold: usize,

        /// Expand a branch only while its support is at least this value (default: threshold + 1)
        #[arg(long)]
        min_support: Option<usize>,

        /// Stop building the tree after this many nodes
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Annotation types to keep
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_TYPES.map(String::from))]
        types: Vec<String>,

        /// Keep generic labels (examen, traitement, ...) instead of filtering them out.
        /// JSON input is filtered on these labels only, its annotation types are unknown
        #[arg(long)]
        keep_stop_labels: bool,

        /// Folder receiving CSV reports
        #[arg(long, default_value = "Outputs")]
        output_dir: PathBuf,

        /// Output format (csv, json, pretty, table)
        #[arg(short = 'f', long)]
        format: Option<String>,

        /// Output file (default: report folder for csv, stdout otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how many documents support each label
    Index {
        /// Folder of .ann files, a single .ann file, or a JSON {document: [labels]} mapping
        #[arg(short, long)]
        path: PathBuf,

        /// Annotation types to keep
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_TYPES.map(String::from))]
        types: Vec<String>,

        /// Keep generic labels instead of filtering them out (JSON input included)
        #[arg(long)]
        keep_stop_labels: bool,

        /// Only show the most supported labels
        #[arg(long)]
        top: Option<usize>,

        /// Output format (table, json, pretty, csv)
        #[arg(short = 'f', long)]
        format: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Rare {
            path,
            experiment_name,
            max_depth,
            threshold,
            min_support,
            max_nodes,
            types,
            keep_stop_labels,
            output_dir,
            format,
            output,
        } => {
            let config = rare::RareConfig {
                path,
                experiment_name,
                max_depth,
                threshold,
                min_support,
                max_nodes,
                types,
                keep_stop_labels,
                output_dir,
                output_format: format,
                output_file: output,
            };
            rare::run(config)
        }

        Commands::Index {
            path,
            types,
            keep_stop_labels,
            top,
            format,
            output,
        } => {
            let filter = if keep_stop_labels {
                AnnotationFilter::types_only(types)
            } else {
                AnnotationFilter::new(types, DEFAULT_STOP_LABELS)
            };
            let config = index::IndexConfig {
                path,
                filter,
                top,
                output_format: format,
                output_file: output,
            };
            index::run(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
