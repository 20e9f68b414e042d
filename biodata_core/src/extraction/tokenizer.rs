//! Raw-text normalization into a token stream.

/// Normalize raw text into an ordered sequence of non-empty tokens.
///
/// Line breaks become single spaces and the literal two-space sequence is
/// collapsed once (a single substitution pass over the text, not a general
/// whitespace collapse) before splitting on whitespace. No case folding:
/// label matching downstream is case-sensitive.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.replace('\n', " ")
        .replace("  ", " ")
        .split_whitespace()
        .map(ToString::to_string)
        .collect()
}
