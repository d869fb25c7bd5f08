//! Search parameters

use csc_diagnostics::{CSC0001, CSC0002, CSC0003, CSC0004, CscError, Result};
use serde::{Deserialize, Serialize};

/// Parameters of a rare-combination search.
///
/// `rarity_threshold` and `min_support_to_expand` are independent. A branch
/// whose support is at or below the rarity threshold can only contain
/// rare supersets, which are suppressed anyway, so `rarity_threshold + 1`
/// is the tightest expansion support that still finds every minimal rare
/// combination. [`SearchConfig::new`] uses that value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum depth of the combination tree
    pub max_depth: usize,
    /// Largest combination reported
    pub max_combination_size: usize,
    /// Inclusive upper bound on the document count of a rare combination
    pub rarity_threshold: usize,
    /// Branches are expanded only while their support is at least this value
    pub min_support_to_expand: usize,
    /// Optional budget on the number of tree nodes
    pub max_nodes: Option<usize>,
}

impl SearchConfig {
    /// Combinations of up to `max_depth` labels found in at most
    /// `rarity_threshold` documents
    pub fn new(max_depth: usize, rarity_threshold: usize) -> Self {
        Self {
            max_depth,
            max_combination_size: max_depth,
            rarity_threshold,
            min_support_to_expand: rarity_threshold.saturating_add(1),
            max_nodes: None,
        }
    }

    pub fn with_max_combination_size(mut self, size: usize) -> Self {
        self.max_combination_size = size;
        self
    }

    pub fn with_min_support_to_expand(mut self, support: usize) -> Self {
        self.min_support_to_expand = support;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Reject parameters that cannot describe a search
    pub fn validate(&self) -> Result<()> {
        self.validate_tree()?;
        validate_combination_size(self.max_combination_size)
    }

    /// Validate only the parameters used while building the tree
    pub(crate) fn validate_tree(&self) -> Result<()> {
        if self.max_depth < 1 {
            return Err(CscError::invalid_configuration(
                CSC0001,
                "max_depth",
                format!("max_depth must be at least 1, got {}", self.max_depth),
            ));
        }
        if self.min_support_to_expand < 1 {
            return Err(CscError::invalid_configuration(
                CSC0003,
                "min_support_to_expand",
                "min_support_to_expand must be at least 1, got 0",
            ));
        }
        if self.max_nodes == Some(0) {
            return Err(CscError::invalid_configuration(
                CSC0004,
                "max_nodes",
                "max_nodes must be at least 1 when set",
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_combination_size(size: usize) -> Result<()> {
    if size < 1 {
        return Err(CscError::invalid_configuration(
            CSC0002,
            "max_combination_size",
            "max_combination_size must be at least 1, got 0",
        ));
    }
    Ok(())
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(3, 5)
    }
}
