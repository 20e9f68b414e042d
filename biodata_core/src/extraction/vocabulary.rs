//! The closed label vocabulary and its canonical-key table.
//!
//! Labels match exactly and case-sensitively; anything else in the token
//! stream is value content. The tables are static so the vocabulary can
//! grow without touching the scanner's control flow.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Labels recognized as field starts, exactly as they appear in source
/// documents (uppercase, `HT&` including the ampersand).
pub const KNOWN_LABELS: [&str; 20] = [
    "DOB",
    "GOTHRAM",
    "TOB",
    "POB",
    "STAR",
    "NAME",
    "SURNAME",
    "HT&",
    "COMPLEX",
    "EDUCATION",
    "JOB",
    "INCOME",
    "ADDRESS",
    "FATHER",
    "OCCUPATION",
    "CONTACT",
    "MOTHER",
    "SIBLINGS",
    "SUBSECT",
    "REQUIREMENTS",
];

/// Structural noise that must never appear in field values: "deceased"
/// markers and bar/no filler from the source layout.
pub const SKIP_TOKENS: [&str; 3] = ["LATE", "NO", "BAR"];

/// Lowercased label to canonical output key.
static CANONICAL_KEYS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("dob", "date_of_birth"),
        ("gothram", "gothram"),
        ("tob", "time_of_birth"),
        ("pob", "place_of_birth"),
        ("star", "star"),
        ("name", "name"),
        ("surname", "surname"),
        ("ht&", "height"),
        ("complex", "complexion"),
        ("education", "education"),
        ("job", "job"),
        ("income", "income"),
        ("address", "address"),
        ("father", "father_name"),
        ("occupation", "occupation"),
        ("contact", "contact"),
        ("mother", "mother_name"),
        ("siblings", "siblings"),
        ("subsect", "subsect"),
        ("requirements", "requirements"),
    ])
});

/// The label set, canonical-key table and skip list used by one scan.
///
/// Defaults to the built-in tables; extra labels and skip tokens can be
/// merged in at construction (e.g. from user configuration).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    labels: HashSet<String>,
    canonical: HashMap<String, String>,
    skip_tokens: HashSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            labels: KNOWN_LABELS.iter().map(ToString::to_string).collect(),
            canonical: CANONICAL_KEYS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            skip_tokens: SKIP_TOKENS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Vocabulary {
    /// Add a label, optionally with a canonical key.
    ///
    /// Without a key the label still surfaces in output, under its own
    /// lowercased name. That fallback is a defined rule of the format, not
    /// a default case: listed-but-unmapped labels must not vanish.
    #[must_use]
    pub fn with_label(mut self, label: &str, key: Option<&str>) -> Self {
        self.labels.insert(label.to_string());
        if let Some(key) = key {
            self.canonical.insert(label.to_lowercase(), key.to_string());
        }
        self
    }

    /// Add a token to the skip list.
    #[must_use]
    pub fn with_skip_token(mut self, token: &str) -> Self {
        self.skip_tokens.insert(token.to_string());
        self
    }

    /// Exact, case-sensitive label membership test.
    #[must_use]
    pub fn is_label(&self, token: &str) -> bool {
        self.labels.contains(token)
    }

    /// Whether the token is structural noise to drop from value runs.
    #[must_use]
    pub fn is_skip_token(&self, token: &str) -> bool {
        self.skip_tokens.contains(token)
    }

    /// Canonical output key for a label, falling back to the lowercased
    /// label itself when no mapping exists.
    #[must_use]
    pub fn canonical_key(&self, label: &str) -> String {
        let lowered = label.to_lowercase();
        self.canonical.get(&lowered).cloned().unwrap_or(lowered)
    }
}
