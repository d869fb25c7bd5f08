//! Standoff `.ann` parsing
//!
//! Only text-bound annotations are read:
//!
//! ```text
//! T1	DISO 120 135	insuffisance rénale
//! T2	PROC 200 210;215 220	dialyse péritonéale
//! ```
//!
//! Relations, events, attributes and notes are skipped.

use serde::{Deserialize, Serialize};

/// A text-bound annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBound {
    pub id: String,
    /// Annotation type, e.g. `PROC`, `DISO`, `CHEM`
    pub kind: String,
    pub start: usize,
    pub end: usize,
    /// Covered text, used as the annotation label
    pub text: String,
}

impl TextBound {
    pub fn new(kind: impl Into<String>, start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            kind: kind.into(),
            start,
            end,
            text: text.into(),
        }
    }

    /// Length of the covered text in characters
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Parse one line; `None` for anything that is not a well-formed text-bound
/// annotation.
///
/// Discontinuous spans (`start end;start end`) are collapsed to their
/// smallest start and largest end.
pub fn parse_line(line: &str) -> Option<TextBound> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = line.splitn(3, '\t');
    let id = fields.next()?;
    let header = fields.next()?;
    let text = fields.next()?;

    if !id.starts_with('T') {
        return None;
    }

    let (kind, offsets) = header.split_once(' ')?;
    let mut start = usize::MAX;
    let mut end = 0;
    for fragment in offsets.split(';') {
        let (s, e) = fragment.trim().split_once(' ')?;
        let s: usize = s.parse().ok()?;
        let e: usize = e.parse().ok()?;
        if e < s {
            return None;
        }
        start = start.min(s);
        end = end.max(e);
    }

    Some(TextBound {
        id: id.to_string(),
        kind: kind.to_string(),
        start,
        end,
        text: text.trim().to_string(),
    })
}

/// Parse every text-bound annotation of a document, in file order
pub fn parse_document(content: &str) -> Vec<TextBound> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                tracing::debug!(line, "skipping non text-bound line");
            }
            parsed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_bound() {
        let ann = parse_line("T1\tDISO 120 135\tinsuffisance rénale").unwrap();
        assert_eq!(ann.id, "T1");
        assert_eq!(ann.kind, "DISO");
        assert_eq!((ann.start, ann.end), (120, 135));
        assert_eq!(ann.text, "insuffisance rénale");
        assert_eq!(ann.text_len(), 19);
    }

    #[test]
    fn test_parse_discontinuous() {
        let ann = parse_line("T2\tPROC 200 210;215 220\tdialyse péritonéale").unwrap();
        assert_eq!((ann.start, ann.end), (200, 220));
    }

    #[test]
    fn test_skip_other_lines() {
        assert!(parse_line("R1\tLinked Arg1:T1 Arg2:T2").is_none());
        assert!(parse_line("#1\tAnnotatorNotes T1\tnote").is_none());
        assert!(parse_line("A1\tNegated T1").is_none());
        assert!(parse_line("T3\tCHEM abc 12\tx").is_none());
        assert!(parse_line("T4\tCHEM 12 3\tx").is_none());
    }

    #[test]
    fn test_parse_document() {
        let content = "T1\tDISO 0 5\tfièvre\nR1\tRel Arg1:T1 Arg2:T2\n\nT2\tCHEM 10 19\tparacétamol\r\n";
        let anns = parse_document(content);
        assert_eq!(anns.len(), 2);
        assert_eq!(anns[1].text, "paracétamol");
    }
}
