//! The field scanner: token stream to one profile.

use crate::extraction::vocabulary::Vocabulary;
use crate::profile::{DuplicatePolicy, Profile};

/// Scan a token sequence left to right and build one profile.
///
/// On an exact label match the cursor advances past the label and greedily
/// consumes tokens until the next label or end of input. Consumed tokens
/// that are single ASCII digits or skip-list entries are dropped as layout
/// artifacts; survivors are space-joined into the value. A label whose run
/// yields no surviving tokens contributes no key at all. Tokens outside any
/// label run are silently skipped.
#[must_use]
pub fn scan(tokens: &[String], vocabulary: &Vocabulary, policy: DuplicatePolicy) -> Profile {
    let mut profile = Profile::new();
    let mut i = 0;

    while i < tokens.len() {
        if vocabulary.is_label(&tokens[i]) {
            let key = vocabulary.canonical_key(&tokens[i]);
            let mut values: Vec<&str> = Vec::new();
            i += 1;

            while i < tokens.len() && !vocabulary.is_label(&tokens[i]) {
                let token = &tokens[i];
                if !is_artifact(token, vocabulary) {
                    values.push(token);
                }
                i += 1;
            }

            if !values.is_empty() {
                let value = values.join(" ").trim().to_string();
                profile.insert_with(key, value, policy);
            }
        } else {
            i += 1;
        }
    }

    profile
}

/// Single ASCII digit tokens and skip-list tokens are layout noise. Only
/// exactly-one-character digit tokens qualify: multi-digit numerals (years,
/// phone fragments) are real content.
fn is_artifact(token: &str, vocabulary: &Vocabulary) -> bool {
    let lone_digit = token.len() == 1 && token.chars().all(|c| c.is_ascii_digit());
    lone_digit || vocabulary.is_skip_token(token)
}
