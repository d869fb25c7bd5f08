//! Combination tree
//!
//! Each node stands for the conjunction of the labels on its root path and
//! carries exactly the documents containing all of them. A child is attached
//! only when that conjunction is non-empty, and a child is expanded further
//! only while its support stays at or above `min_support_to_expand`:
//! intersecting can never grow a document set, so a thinner branch cannot
//! lead to better-supported supersets.

use crate::config::SearchConfig;
use crate::index::{AnnotationIndex, DocumentSet, LabelId};
use csc_diagnostics::Result;

/// One annotation combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinationNode {
    label: Option<LabelId>,
    documents: DocumentSet,
    children: Vec<CombinationNode>,
}

impl CombinationNode {
    fn new(label: Option<LabelId>, documents: DocumentSet) -> Self {
        Self {
            label,
            documents,
            children: Vec::new(),
        }
    }

    /// Label this node adds to its parent's combination (`None` at the root)
    pub fn label(&self) -> Option<LabelId> {
        self.label
    }

    /// Documents containing every label on the root path
    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn support(&self) -> usize {
        self.documents.len()
    }

    pub fn children(&self) -> &[CombinationNode] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.label.is_none()
    }
}

/// Tree of annotation combinations over an [`AnnotationIndex`]
#[derive(Debug, Clone)]
pub struct CombinationTree<'a> {
    index: &'a AnnotationIndex,
    root: CombinationNode,
    node_count: usize,
    truncated: bool,
}

impl<'a> CombinationTree<'a> {
    /// Build the tree over `labels`, in the given order.
    ///
    /// Labels unknown to the index have no supporting document and never
    /// produce a node. Repeated labels are considered once.
    pub fn build<S: AsRef<str>>(
        labels: &[S],
        config: &SearchConfig,
        index: &'a AnnotationIndex,
    ) -> Result<Self> {
        config.validate_tree()?;

        let mut candidates: Vec<LabelId> = Vec::with_capacity(labels.len());
        for label in labels {
            match index.label_id(label.as_ref()) {
                Some(id) if !candidates.contains(&id) => candidates.push(id),
                Some(_) => {}
                None => {
                    tracing::debug!(label = label.as_ref(), "label absent from index, skipped");
                }
            }
        }

        let mut builder = Builder {
            index,
            max_depth: config.max_depth,
            min_support: config.min_support_to_expand,
            max_nodes: config.max_nodes,
            node_count: 0,
            truncated: false,
        };

        let mut root = CombinationNode::new(None, index.universe().clone());
        builder.expand(&mut root, &candidates, 0);

        if builder.truncated {
            tracing::warn!(
                nodes = builder.node_count,
                "node budget reached, combination tree is incomplete"
            );
        }
        tracing::debug!(
            nodes = builder.node_count,
            labels = candidates.len(),
            max_depth = config.max_depth,
            "combination tree built"
        );

        Ok(Self {
            index,
            root,
            node_count: builder.node_count,
            truncated: builder.truncated,
        })
    }

    /// Build the tree over every label of the index, in first-seen order
    pub fn from_index(index: &'a AnnotationIndex, config: &SearchConfig) -> Result<Self> {
        let labels: Vec<&str> = index.labels().collect();
        Self::build(&labels, config, index)
    }

    pub fn root(&self) -> &CombinationNode {
        &self.root
    }

    pub fn index(&self) -> &'a AnnotationIndex {
        self.index
    }

    /// Number of nodes, root excluded
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether the node budget stopped the construction early
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

struct Builder<'a> {
    index: &'a AnnotationIndex,
    max_depth: usize,
    min_support: usize,
    max_nodes: Option<usize>,
    node_count: usize,
    truncated: bool,
}

impl Builder<'_> {
    fn budget_exhausted(&self) -> bool {
        self.max_nodes.is_some_and(|max| self.node_count >= max)
    }

    fn expand(&mut self, node: &mut CombinationNode, candidates: &[LabelId], depth: usize) {
        if depth >= self.max_depth {
            return;
        }

        for &label in candidates {
            if self.budget_exhausted() {
                self.truncated = true;
                return;
            }

            let Some(postings) = self.index.postings(label) else {
                continue;
            };
            let documents: DocumentSet = node.documents.intersection(postings).copied().collect();
            if documents.is_empty() {
                continue;
            }

            let mut child = CombinationNode::new(Some(label), documents);
            self.node_count += 1;

            if child.support() >= self.min_support {
                let remaining: Vec<LabelId> = candidates
                    .iter()
                    .copied()
                    .filter(|&candidate| candidate != label)
                    .collect();
                self.expand(&mut child, &remaining, depth + 1);
            }

            node.children.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_index() -> AnnotationIndex {
        AnnotationIndex::build([
            ("d1", vec!["a", "b"]),
            ("d2", vec!["a", "b"]),
            ("d3", vec!["a", "c"]),
        ])
    }

    fn child<'n>(node: &'n CombinationNode, index: &AnnotationIndex, label: &str) -> Option<&'n CombinationNode> {
        let id = index.label_id(label)?;
        node.children().iter().find(|c| c.label() == Some(id))
    }

    #[test]
    fn test_root_carries_universe() {
        let index = scenario_index();
        let config = SearchConfig::new(2, 1).with_min_support_to_expand(1);
        let tree = CombinationTree::from_index(&index, &config).unwrap();

        assert!(tree.root().is_root());
        assert_eq!(tree.root().support(), 3);
        assert_eq!(tree.root().children().len(), 3);
    }

    #[test]
    fn test_empty_intersection_not_attached() {
        let index = scenario_index();
        let config = SearchConfig::new(2, 1).with_min_support_to_expand(1);
        let tree = CombinationTree::from_index(&index, &config).unwrap();

        let b = child(tree.root(), &index, "b").unwrap();
        assert!(child(b, &index, "c").is_none());
        let ab = child(b, &index, "a").unwrap();
        assert_eq!(ab.support(), 2);
    }

    #[test]
    fn test_low_support_child_stays_leaf() {
        let index = scenario_index();
        let config = SearchConfig::new(3, 1).with_min_support_to_expand(2);
        let tree = CombinationTree::from_index(&index, &config).unwrap();

        let c = child(tree.root(), &index, "c").unwrap();
        assert_eq!(c.support(), 1);
        assert!(c.children().is_empty());
    }

    #[test]
    fn test_depth_bound() {
        let index = scenario_index();
        let config = SearchConfig::new(1, 0).with_min_support_to_expand(1);
        let tree = CombinationTree::from_index(&index, &config).unwrap();

        assert_eq!(tree.node_count(), 3);
        assert!(tree.root().children().iter().all(|c| c.children().is_empty()));
    }

    #[test]
    fn test_empty_labels_root_only() {
        let index = scenario_index();
        let tree = CombinationTree::build::<&str>(&[], &SearchConfig::new(2, 1), &index).unwrap();

        assert!(tree.root().children().is_empty());
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_unknown_and_repeated_labels() {
        let index = scenario_index();
        let config = SearchConfig::new(1, 1).with_min_support_to_expand(1);
        let tree = CombinationTree::build(&["zzz", "a", "a"], &config, &index).unwrap();

        assert_eq!(tree.root().children().len(), 1);
    }

    #[test]
    fn test_node_budget_truncates() {
        let index = scenario_index();
        let config = SearchConfig::new(3, 0)
            .with_min_support_to_expand(1)
            .with_max_nodes(Some(2));
        let tree = CombinationTree::from_index(&index, &config).unwrap();

        assert_eq!(tree.node_count(), 2);
        assert!(tree.is_truncated());
    }

    #[test]
    fn test_invalid_configuration_fails_fast() {
        let index = scenario_index();
        assert!(CombinationTree::from_index(&index, &SearchConfig::new(0, 1)).is_err());
    }
}
