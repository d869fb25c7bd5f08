//! Rare combination extraction
//!
//! Walks a [`CombinationTree`] depth-first, children in attachment order,
//! and reports every combination found in at most `rarity_threshold`
//! documents unless a smaller rare combination already explains it.
//!
//! Suppression keeps a flagged set of the canonical combinations reported so
//! far. The tree enumerates label orderings, so the same set can be reached
//! through several paths; a combination already flagged is never reported
//! twice. A rare combination is also suppressed when one of its proper
//! subsets is rare. Because every superset of a rare combination is rare,
//! it is enough to test the subsets missing exactly one label. Subset
//! supports come from the tree itself, collected before the walk, so the
//! result does not depend on which branch the walk reaches first, and a
//! subset the node budget never built cannot hide a combination.

use crate::config::{SearchConfig, validate_combination_size};
use crate::index::{AnnotationIndex, LabelId};
use crate::tree::{CombinationNode, CombinationTree};
use csc_diagnostics::Result;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};

type Combination = SmallVec<[LabelId; 4]>;

/// A reported rare combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RareCombinationRecord {
    /// Labels of the combination, sorted
    pub combination: Vec<String>,
    /// Documents containing every label of the combination
    pub documents: Vec<String>,
}

impl RareCombinationRecord {
    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    pub fn size(&self) -> usize {
        self.combination.len()
    }
}

/// Extracts rare combinations from a combination tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RareCombinationExtractor {
    rarity_threshold: usize,
    max_combination_size: usize,
}

impl RareCombinationExtractor {
    pub fn new(rarity_threshold: usize, max_combination_size: usize) -> Result<Self> {
        validate_combination_size(max_combination_size)?;
        Ok(Self {
            rarity_threshold,
            max_combination_size,
        })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        Self::new(config.rarity_threshold, config.max_combination_size)
    }

    /// Report the rare combinations of `tree` in traversal order
    pub fn extract(&self, tree: &CombinationTree<'_>) -> Vec<RareCombinationRecord> {
        let mut present = HashMap::new();
        for child in tree.root().children() {
            collect_supports(child, &[], self.max_combination_size, &mut present);
        }

        let mut walk = Walk {
            index: tree.index(),
            rarity_threshold: self.rarity_threshold,
            max_combination_size: self.max_combination_size,
            flagged: HashSet::new(),
            present,
            records: Vec::new(),
        };

        for child in tree.root().children() {
            walk.visit(child, &[]);
        }

        tracing::debug!(
            reported = walk.records.len(),
            flagged = walk.flagged.len(),
            "rare combinations extracted"
        );
        walk.records
    }
}

struct Walk<'a> {
    index: &'a AnnotationIndex,
    rarity_threshold: usize,
    max_combination_size: usize,
    flagged: HashSet<Combination>,
    /// Support of every combination built in the tree
    present: HashMap<Combination, usize>,
    records: Vec<RareCombinationRecord>,
}

impl Walk<'_> {
    fn visit(&mut self, node: &CombinationNode, parent_path: &[LabelId]) {
        let Some(label) = node.label() else {
            return;
        };

        let mut path: Combination = SmallVec::from_slice(parent_path);
        path.push(label);
        if path.len() > self.max_combination_size {
            return;
        }

        if node.support() <= self.rarity_threshold {
            let mut combo = path.clone();
            combo.sort_unstable();

            if !self.is_suppressed(&combo) {
                let record = RareCombinationRecord {
                    combination: self.label_names(&combo),
                    documents: self.index.document_names(node.documents()),
                };
                self.records.push(record);
                self.flagged.insert(combo);
            }
        }

        for child in node.children() {
            self.visit(child, &path);
        }
    }

    fn is_suppressed(&self, combo: &Combination) -> bool {
        if self.flagged.contains(combo) {
            return true;
        }
        if combo.len() < 2 {
            return false;
        }

        (0..combo.len()).any(|skip| {
            let subset: Combination = combo
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != skip)
                .map(|(_, &label)| label)
                .collect();
            self.flagged.contains(&subset)
                || self
                    .present
                    .get(&subset)
                    .is_some_and(|&support| support <= self.rarity_threshold)
        })
    }

    fn label_names(&self, combo: &[LabelId]) -> Vec<String> {
        let mut names: Vec<String> = combo
            .iter()
            .filter_map(|&label| self.index.label(label))
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }
}

/// Record the support of each canonical combination of the subtree
fn collect_supports(
    node: &CombinationNode,
    parent_path: &[LabelId],
    max_size: usize,
    present: &mut HashMap<Combination, usize>,
) {
    let Some(label) = node.label() else {
        return;
    };
    let mut path: Combination = SmallVec::from_slice(parent_path);
    path.push(label);
    if path.len() > max_size {
        return;
    }

    let mut combo = path.clone();
    combo.sort_unstable();
    present.entry(combo).or_insert(node.support());

    for child in node.children() {
        collect_supports(child, &path, max_size, present);
    }
}
