//! Span-overlap resolution
//!
//! Annotations are visited in file order while one annotation is held as
//! current. An annotation starting at or after the current end closes the
//! current one; an overlapping annotation replaces it only when its text is
//! longer. Closed annotations become labels unless the filter drops them.

use crate::brat::TextBound;
use crate::filter::AnnotationFilter;
use csc_diagnostics::{CSC0102, CscError, Result};

/// Character range of a `.ann` file that belongs to one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanWindow {
    start: usize,
    end: usize,
}

impl SpanWindow {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if end < start {
            return Err(CscError::input(
                CSC0102,
                format!("span window end {end} precedes start {start}"),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, annotation: &TextBound) -> bool {
        self.start <= annotation.start && annotation.end <= self.end
    }
}

/// Resolve overlapping annotations into the document's label list
pub fn resolve_overlaps(
    annotations: &[TextBound],
    filter: &AnnotationFilter,
    window: Option<SpanWindow>,
) -> Vec<String> {
    let mut kept = annotations.iter().filter(|annotation| {
        filter.keeps_type(&annotation.kind) && window.is_none_or(|w| w.contains(annotation))
    });

    let Some(mut current) = kept.next() else {
        return Vec::new();
    };

    let mut labels = Vec::new();
    for annotation in kept {
        if annotation.start >= current.end {
            if !filter.drops_label(&current.text) {
                labels.push(current.text.clone());
            }
            current = annotation;
        } else if annotation.text_len() > current.text_len() {
            current = annotation;
        }
    }
    if !filter.drops_label(&current.text) {
        labels.push(current.text.clone());
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> AnnotationFilter {
        AnnotationFilter::new(["DISO", "PROC"], ["bilan"])
    }

    #[test]
    fn test_disjoint_annotations_kept_in_order() {
        let anns = vec![
            TextBound::new("DISO", 0, 6, "fièvre"),
            TextBound::new("PROC", 10, 20, "radiographie"),
        ];
        assert_eq!(resolve_overlaps(&anns, &filter(), None), vec!["fièvre", "radiographie"]);
    }

    #[test]
    fn test_longest_overlapping_text_wins() {
        let anns = vec![
            TextBound::new("DISO", 0, 12, "insuffisance"),
            TextBound::new("DISO", 0, 19, "insuffisance rénale"),
            TextBound::new("DISO", 13, 19, "rénale"),
            TextBound::new("PROC", 25, 33, "dialyse"),
        ];
        assert_eq!(
            resolve_overlaps(&anns, &filter(), None),
            vec!["insuffisance rénale", "dialyse"]
        );
    }

    #[test]
    fn test_shorter_overlap_ignored() {
        let anns = vec![
            TextBound::new("PROC", 0, 20, "scanner thoracique"),
            TextBound::new("PROC", 0, 7, "scanner"),
        ];
        assert_eq!(resolve_overlaps(&anns, &filter(), None), vec!["scanner thoracique"]);
    }

    #[test]
    fn test_types_and_stop_labels_filtered() {
        let anns = vec![
            TextBound::new("ANAT", 0, 5, "foie"),
            TextBound::new("PROC", 6, 11, "bilan"),
            TextBound::new("DISO", 12, 20, "ictère"),
        ];
        assert_eq!(resolve_overlaps(&anns, &filter(), None), vec!["ictère"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(resolve_overlaps(&[], &filter(), None).is_empty());
        let anns = vec![TextBound::new("ANAT", 0, 5, "foie")];
        assert!(resolve_overlaps(&anns, &filter(), None).is_empty());
    }

    #[test]
    fn test_span_window() {
        let anns = vec![
            TextBound::new("DISO", 0, 6, "fièvre"),
            TextBound::new("DISO", 100, 110, "hépatite"),
        ];
        let window = SpanWindow::new(50, 200).unwrap();
        assert_eq!(resolve_overlaps(&anns, &filter(), Some(window)), vec!["hépatite"]);
    }

    #[test]
    fn test_invalid_window() {
        assert_eq!(SpanWindow::new(10, 5).unwrap_err().code(), CSC0102);
    }
}
