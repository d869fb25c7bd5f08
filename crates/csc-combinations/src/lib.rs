//! Rare annotation combination search
//!
//! This crate finds combinations of annotation labels that occur in few
//! documents of a corpus:
//! - [`AnnotationIndex`] inverts `{document → labels}` into `{label → documents}`
//! - [`CombinationTree`] enumerates label combinations with their exact support
//! - [`RareCombinationExtractor`] reports the rare ones, suppressing redundant supersets
//!
//! # Example
//!
//! ```
//! use csc_combinations::{AnnotationIndex, SearchConfig, search};
//!
//! let index = AnnotationIndex::build([
//!     ("d1", vec!["fever", "cough"]),
//!     ("d2", vec!["fever", "cough"]),
//!     ("d3", vec!["fever", "rash"]),
//! ]);
//!
//! let outcome = search(&index, &SearchConfig::new(2, 1)).unwrap();
//! assert_eq!(outcome.records[0].combination, vec!["rash"]);
//! ```

mod config;
mod extract;
mod index;
mod tree;

pub use config::*;
pub use extract::*;
pub use index::*;
pub use tree::*;

use csc_diagnostics::Result;

/// Result of a complete search over an index
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Rare combinations in traversal order
    pub records: Vec<RareCombinationRecord>,
    /// Number of tree nodes explored
    pub node_count: usize,
    /// Whether the node budget cut the tree short
    pub truncated: bool,
}

/// Validate `config`, build the tree over every indexed label and extract
/// the rare combinations
pub fn search(index: &AnnotationIndex, config: &SearchConfig) -> Result<SearchOutcome> {
    config.validate()?;

    let tree = CombinationTree::from_index(index, config)?;
    let records = RareCombinationExtractor::from_config(config)?.extract(&tree);

    Ok(SearchOutcome {
        records,
        node_count: tree.node_count(),
        truncated: tree.is_truncated(),
    })
}
