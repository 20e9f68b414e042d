//! Extraction engine: ties tokenizer, scanner and splitter together.

use tracing::debug;

use crate::extraction::scanner::scan;
use crate::extraction::splitter::{BoundaryPredicate, LabelBoundary};
use crate::extraction::tokenizer::tokenize;
use crate::extraction::vocabulary::Vocabulary;
use crate::profile::DuplicatePolicy;
use crate::result::{DebugInfo, ExtractionResult};

/// Message carried by the empty result variant.
pub const NO_PROFILE_ERROR: &str = "No profile data found";

/// Stateless extraction engine.
///
/// Every call to [`extract`](Self::extract) is a pure function of its
/// input text: the engine holds only the vocabulary, the duplicate-label
/// policy and the profile boundary strategy.
pub struct ExtractionEngine {
    vocabulary: Vocabulary,
    duplicate_policy: DuplicatePolicy,
    boundary: Box<dyn BoundaryPredicate>,
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

impl ExtractionEngine {
    /// Create an engine over the given vocabulary, with the default
    /// duplicate policy and the `DOB`-label boundary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            duplicate_policy: DuplicatePolicy::default(),
            boundary: Box::new(LabelBoundary::dob()),
        }
    }

    /// Swap the duplicate-label policy.
    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Swap the profile boundary strategy.
    #[must_use]
    pub fn with_boundary(mut self, boundary: impl BoundaryPredicate + 'static) -> Self {
        self.boundary = Box::new(boundary);
        self
    }

    /// Extract one or more profiles from raw document text.
    ///
    /// The boundary marker count over the raw text decides single versus
    /// multi-profile mode once, up front. In multi-profile mode each
    /// section is scanned independently; empty sections are dropped from
    /// the output but still consume their 1-based `profile_id` index.
    #[must_use]
    pub fn extract(&self, text: &str, with_debug: bool) -> ExtractionResult {
        let tokens = tokenize(text);
        let mut debug_info = with_debug.then(|| DebugInfo {
            total_tokens: tokens.len(),
            first_tokens: tokens.iter().take(20).cloned().collect(),
            found_labels: tokens
                .iter()
                .filter(|t| self.vocabulary.is_label(t))
                .cloned()
                .collect(),
            sections_found: None,
        });

        let boundary_count = self.boundary.count(text);
        if boundary_count > 1 {
            let sections = self.boundary.split(text);
            debug!(sections = sections.len(), "multi-profile input detected");

            let mut profiles = Vec::new();
            for (idx, section) in sections.iter().enumerate() {
                let section_tokens = tokenize(section);
                let mut profile = scan(&section_tokens, &self.vocabulary, self.duplicate_policy);
                if !profile.is_empty() {
                    profile.insert("profile_id".to_string(), format!("profile_{}", idx + 1));
                    profiles.push(profile);
                }
            }

            if let Some(info) = debug_info.as_mut() {
                info.sections_found = Some(sections.len());
            }

            ExtractionResult::Multiple {
                profiles,
                debug: debug_info,
            }
        } else {
            let profile = scan(&tokens, &self.vocabulary, self.duplicate_policy);
            if profile.is_empty() {
                debug!("no vocabulary labels recognized");
                ExtractionResult::Empty {
                    error: NO_PROFILE_ERROR.to_string(),
                    debug: debug_info,
                }
            } else {
                debug!(fields = profile.len(), "single profile extracted");
                ExtractionResult::Single {
                    profile,
                    debug: debug_info,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_profile_extraction() {
        let engine = ExtractionEngine::default();
        let result = engine.extract("DOB 08-02-1979 NAME Dharanidhar INCOME 04.80 LPA", false);

        let ExtractionResult::Single { profile, debug } = result else {
            panic!("expected single profile");
        };
        assert_eq!(profile.get("date_of_birth"), Some("08-02-1979"));
        assert_eq!(profile.get("name"), Some("Dharanidhar"));
        assert_eq!(profile.get("income"), Some("04.80 LPA"));
        assert!(debug.is_none());
    }

    #[test]
    fn zero_labels_is_the_error_result() {
        let engine = ExtractionEngine::default();
        let result = engine.extract("completely unstructured text", false);

        assert!(result.is_empty());
        let ExtractionResult::Empty { error, .. } = result else {
            panic!("expected empty result");
        };
        assert_eq!(error, NO_PROFILE_ERROR);
    }

    #[test]
    fn empty_input_is_well_formed() {
        let engine = ExtractionEngine::default();
        assert!(engine.extract("", false).is_empty());
        assert!(engine.extract("", true).is_empty());
    }

    #[test]
    fn two_boundaries_yield_two_tagged_profiles() {
        let engine = ExtractionEngine::default();
        let text = "DOB 08-02-1979 NAME Dharanidhar\nDOB 15-05-1985 NAME Priya";
        let result = engine.extract(text, false);

        let ExtractionResult::Multiple { profiles, .. } = result else {
            panic!("expected multiple profiles");
        };
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].get("profile_id"), Some("profile_1"));
        assert_eq!(profiles[0].get("name"), Some("Dharanidhar"));
        assert_eq!(profiles[1].get("profile_id"), Some("profile_2"));
        assert_eq!(profiles[1].get("name"), Some("Priya"));
    }

    #[test]
    fn empty_section_consumes_its_index() {
        let engine = ExtractionEngine::default();
        // Section 2 contains only the bare DOB marker with no value run and
        // no other labels, so it extracts empty; section 3 must still be
        // tagged profile_3.
        let text = "DOB 08-02-1979 NAME A\nDOB \nDOB 15-05-1985 NAME B";
        let result = engine.extract(text, false);

        let ExtractionResult::Multiple { profiles, .. } = result else {
            panic!("expected multiple profiles");
        };
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].get("profile_id"), Some("profile_1"));
        assert_eq!(profiles[1].get("profile_id"), Some("profile_3"));
    }

    #[test]
    fn debug_payload_reports_tokens_and_labels() {
        let engine = ExtractionEngine::default();
        let result = engine.extract("DOB 08-02-1979 NAME Dharanidhar", true);

        let info = result.debug().cloned();
        let ExtractionResult::Single { .. } = result else {
            panic!("expected single profile");
        };
        let info = info.unwrap_or_default();
        assert_eq!(info.total_tokens, 4);
        assert_eq!(info.first_tokens.len(), 4);
        assert_eq!(info.found_labels, vec!["DOB", "NAME"]);
        assert_eq!(info.sections_found, None);
    }

    #[test]
    fn debug_payload_attaches_to_all_branches() {
        let engine = ExtractionEngine::default();

        let empty = engine.extract("nothing", true);
        assert!(empty.debug().is_some());

        let multi = engine.extract("DOB 1-1-1990 NAME A DOB 2-2-1991 NAME B", true);
        assert!(multi.debug().is_some());
        assert_eq!(
            multi.debug().and_then(|d| d.sections_found),
            Some(2),
            "multi-profile debug carries the section count"
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let engine = ExtractionEngine::default();
        let text = "DOB 08-02-1979 NAME Dharanidhar INCOME 04.80 LPA";
        assert_eq!(engine.extract(text, true), engine.extract(text, true));
    }
}
