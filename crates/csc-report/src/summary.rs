//! Corpus statistics over an annotation index

use csc_combinations::AnnotationIndex;
use serde::{Deserialize, Serialize};

/// Document count of one label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSupport {
    pub label: String,
    pub documents: usize,
}

/// Overview of an indexed corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSummary {
    pub documents: usize,
    pub labels: usize,
    /// Labels by document count descending, then label
    pub supports: Vec<LabelSupport>,
}

impl IndexSummary {
    /// Summarise `index`, keeping the `top` best-supported labels when given
    pub fn from_index(index: &AnnotationIndex, top: Option<usize>) -> Self {
        let mut supports: Vec<LabelSupport> = index
            .iter()
            .map(|(label, docs)| LabelSupport {
                label: label.to_string(),
                documents: docs.len(),
            })
            .collect();
        supports.sort_by(|a, b| b.documents.cmp(&a.documents).then_with(|| a.label.cmp(&b.label)));
        if let Some(top) = top {
            supports.truncate(top);
        }

        Self {
            documents: index.document_count(),
            labels: index.label_count(),
            supports,
        }
    }
}
