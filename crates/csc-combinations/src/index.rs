//! Inverse annotation index
//!
//! Turns `{document → labels}` into `{label → documents}`. Documents and
//! labels are interned in first-seen order, so every structure built on top
//! of the index (tree children, extraction order) is deterministic for a
//! given input ordering.

use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;

/// Synthetic label of the tree root; maps to every document considered.
pub const ROOT_LABEL: &str = "";

/// Interned document identifier (position in first-seen order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(usize);

impl DocId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Interned annotation label identifier (position in first-seen order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelId(usize);

impl LabelId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Set of supporting documents
pub type DocumentSet = BTreeSet<DocId>;

/// Mapping from annotation label to the documents containing it
#[derive(Debug, Clone, Default)]
pub struct AnnotationIndex {
    documents: IndexSet<String>,
    postings: IndexMap<String, DocumentSet>,
    universe: DocumentSet,
}

impl AnnotationIndex {
    /// Build the index from per-document label lists.
    ///
    /// Every document is added to the universe, including documents without
    /// any label. An empty label only registers its document: it is the key
    /// of the universe, not a real annotation.
    pub fn build<I, D, L, S>(per_document: I) -> Self
    where
        I: IntoIterator<Item = (D, L)>,
        D: AsRef<str>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();

        for (document, labels) in per_document {
            let (position, _) = index.documents.insert_full(document.as_ref().to_string());
            let doc = DocId(position);
            index.universe.insert(doc);

            for label in labels {
                let label = label.as_ref();
                if label == ROOT_LABEL {
                    continue;
                }
                match index.postings.get_mut(label) {
                    Some(documents) => {
                        documents.insert(doc);
                    }
                    None => {
                        index
                            .postings
                            .insert(label.to_string(), DocumentSet::from([doc]));
                    }
                }
            }
        }

        tracing::debug!(
            documents = index.documents.len(),
            labels = index.postings.len(),
            "annotation index built"
        );
        index
    }

    /// Documents containing `label`; the root label yields every document.
    pub fn documents_for(&self, label: &str) -> Option<&DocumentSet> {
        if label == ROOT_LABEL {
            Some(&self.universe)
        } else {
            self.postings.get(label)
        }
    }

    /// Every document considered
    pub fn universe(&self) -> &DocumentSet {
        &self.universe
    }

    /// Number of documents containing `label` (zero when unknown)
    pub fn support(&self, label: &str) -> usize {
        self.documents_for(label).map_or(0, DocumentSet::len)
    }

    /// Real labels in first-seen order (the root label is excluded)
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Labels with their supporting documents, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentSet)> {
        self.postings.iter().map(|(label, docs)| (label.as_str(), docs))
    }

    pub fn label_id(&self, label: &str) -> Option<LabelId> {
        self.postings.get_index_of(label).map(LabelId)
    }

    pub fn label(&self, id: LabelId) -> Option<&str> {
        self.postings.get_index(id.0).map(|(label, _)| label.as_str())
    }

    /// Postings of an interned label
    pub fn postings(&self, id: LabelId) -> Option<&DocumentSet> {
        self.postings.get_index(id.0).map(|(_, docs)| docs)
    }

    pub fn document_name(&self, id: DocId) -> Option<&str> {
        self.documents.get_index(id.0).map(String::as_str)
    }

    /// Resolve a document set to document names, in first-seen order
    pub fn document_names(&self, documents: &DocumentSet) -> Vec<String> {
        documents
            .iter()
            .filter_map(|&doc| self.document_name(doc))
            .map(str::to_string)
            .collect()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn label_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
