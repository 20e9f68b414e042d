//! Multi-profile boundary detection and raw-text splitting.

/// Decides where one profile ends and the next begins in raw text.
///
/// Detection is binary and global: the engine asks for a count once per
/// input, before any extraction runs. Splitting on a literal label marker
/// assumes the source convention that every profile opens with that label;
/// alternate strategies plug in here without touching the scanner.
pub trait BoundaryPredicate: Send + Sync {
    /// Number of boundary marker occurrences in the raw text.
    fn count(&self, text: &str) -> usize;

    /// Split the raw text into per-profile sections with the marker
    /// restored at the front of each. Text before the first marker is
    /// discarded as preamble.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Boundary on a literal label-plus-space marker, e.g. `"DOB "`.
#[derive(Debug, Clone)]
pub struct LabelBoundary {
    marker: String,
}

impl LabelBoundary {
    /// Boundary on `"{label} "`.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            marker: format!("{label} "),
        }
    }

    /// The source-format default: profiles open with a `DOB` field.
    #[must_use]
    pub fn dob() -> Self {
        Self::new("DOB")
    }
}

impl BoundaryPredicate for LabelBoundary {
    fn count(&self, text: &str) -> usize {
        text.matches(&self.marker).count()
    }

    fn split(&self, text: &str) -> Vec<String> {
        text.split(&self.marker)
            .skip(1)
            .map(|section| format!("{}{section}", self.marker))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_marker_occurrences() {
        let boundary = LabelBoundary::dob();
        assert_eq!(boundary.count("DOB 08-02-1979 NAME X"), 1);
        assert_eq!(boundary.count("DOB 08-02-1979\nDOB 15-05-1985"), 2);
        assert_eq!(boundary.count("no markers at all"), 0);
    }

    #[test]
    fn marker_requires_trailing_space() {
        let boundary = LabelBoundary::dob();
        // "DOB" at end of text has no trailing space and does not count.
        assert_eq!(boundary.count("NAME X DOB"), 0);
    }

    #[test]
    fn split_restores_marker_and_drops_preamble() {
        let boundary = LabelBoundary::dob();
        let sections = boundary.split("preamble DOB 08-02-1979 NAME X DOB 15-05-1985 NAME Y");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], "DOB 08-02-1979 NAME X ");
        assert_eq!(sections[1], "DOB 15-05-1985 NAME Y");
    }

    #[test]
    fn custom_label_boundary() {
        let boundary = LabelBoundary::new("NAME");
        assert_eq!(boundary.count("NAME A NAME B NAME C"), 3);
        assert_eq!(boundary.split("NAME A NAME B NAME C").len(), 3);
    }
}
