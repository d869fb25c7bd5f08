//! Clinical annotation co-occurrence analysis
//!
//! This crate bundles the whole pipeline:
//! - Loading standoff annotations and resolving overlapping spans
//! - Indexing labels by document
//! - Searching rare label combinations
//! - Writing sorted reports
//!
//! # Example
//!
//! ```
//! use csc::{AnnotationIndex, Report, SearchConfig, search};
//!
//! let index = AnnotationIndex::build([
//!     ("cas-1", vec!["asthme", "toux"]),
//!     ("cas-2", vec!["asthme", "toux"]),
//!     ("cas-3", vec!["asthme", "salbutamol"]),
//! ]);
//!
//! let outcome = search(&index, &SearchConfig::new(2, 1))?;
//! let report = Report::assemble(outcome.records);
//! assert_eq!(report.rows()[0].combination, vec!["salbutamol"]);
//! # Ok::<(), csc::CscError>(())
//! ```

// Re-export all public APIs from internal crates
pub use csc_annotations as annotations;
pub use csc_combinations as combinations;
pub use csc_diagnostics as diagnostics;
pub use csc_report as report;

// Convenience re-exports
pub use csc_annotations::{AnnotationFilter, DocumentAnnotations};
pub use csc_combinations::{
    AnnotationIndex, CombinationTree, RareCombinationExtractor, RareCombinationRecord,
    SearchConfig, SearchOutcome, search,
};
pub use csc_diagnostics::{CscError, Result};
pub use csc_report::Report;

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
