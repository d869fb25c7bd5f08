//! Clinical annotation loading
//!
//! Reads standoff `.ann` annotations, resolves overlapping spans and turns
//! each document into the flat list of labels the combination search
//! consumes.

pub mod brat;
pub mod filter;
pub mod loader;
pub mod resolve;

pub use brat::{TextBound, parse_document, parse_line};
pub use filter::{AnnotationFilter, DEFAULT_STOP_LABELS, DEFAULT_TYPES};
pub use loader::{flatten, load, load_file, load_folder, load_json, parse_json};
pub use resolve::{SpanWindow, resolve_overlaps};

use indexmap::IndexMap;

/// Labels of each document, in document order
pub type DocumentAnnotations = IndexMap<String, Vec<String>>;
