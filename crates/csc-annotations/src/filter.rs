//! Which annotations count as labels

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Annotation types kept by default: procedures, disorders, chemicals
pub const DEFAULT_TYPES: [&str; 3] = ["PROC", "DISO", "CHEM"];

/// Generic mentions that carry no clinical signal in the French case-report corpora
pub const DEFAULT_STOP_LABELS: [&str; 28] = [
    "examen clinique",
    "examen",
    "traitement",
    "hospitalisation",
    "consulté",
    "admission",
    "signes",
    "consultation",
    "prise en charge",
    "suivi",
    "suivie",
    "hospitalisé",
    "recherche",
    "admis",
    "admise",
    "bilan",
    "traitée",
    "consulte",
    "maladie",
    "geste",
    "adressé",
    "observation",
    "Elle",
    "elle",
    "il",
    "Il",
    "consultait",
    "processus",
];

/// Type and label filters applied while resolving a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationFilter {
    /// Annotation types considered at all
    pub types_to_keep: BTreeSet<String>,
    /// Labels dropped after overlap resolution
    pub filter_out: BTreeSet<String>,
}

impl AnnotationFilter {
    pub fn new<T, F>(types_to_keep: T, filter_out: F) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            types_to_keep: types_to_keep.into_iter().map(Into::into).collect(),
            filter_out: filter_out.into_iter().map(Into::into).collect(),
        }
    }

    /// Keep `types`, drop nothing
    pub fn types_only<T>(types: T) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self::new(types, Vec::<String>::new())
    }

    pub fn keeps_type(&self, kind: &str) -> bool {
        self.types_to_keep.contains(kind)
    }

    pub fn drops_label(&self, label: &str) -> bool {
        self.filter_out.contains(label)
    }
}

impl Default for AnnotationFilter {
    fn default() -> Self {
        Self::new(DEFAULT_TYPES, DEFAULT_STOP_LABELS)
    }
}
