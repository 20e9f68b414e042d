//! Extraction result and debug payload types.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Diagnostic payload attached to a result when debug mode is on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DebugInfo {
    /// Total token count after normalization.
    pub total_tokens: usize,

    /// The first 20 tokens, for eyeballing tokenizer behavior.
    pub first_tokens: Vec<String>,

    /// Every vocabulary label occurrence, in source order.
    pub found_labels: Vec<String>,

    /// Number of sections the boundary split produced (multi-profile only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections_found: Option<usize>,
}

/// Outcome of one extraction call.
///
/// Serializes untagged so the JSON shapes are exactly `{"profile": …}`,
/// `{"profiles": […]}` or `{"error": "…"}`, each with an optional
/// `"debug"` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExtractionResult {
    /// A single profile was found.
    Single {
        profile: Profile,
        #[serde(skip_serializing_if = "Option::is_none")]
        debug: Option<DebugInfo>,
    },
    /// The boundary label occurred more than once; one entry per non-empty
    /// section. The list may be empty if every section came back empty.
    Multiple {
        profiles: Vec<Profile>,
        #[serde(skip_serializing_if = "Option::is_none")]
        debug: Option<DebugInfo>,
    },
    /// No vocabulary label was recognized anywhere in the input.
    Empty {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        debug: Option<DebugInfo>,
    },
}

impl ExtractionResult {
    /// Whether the extraction produced no profile data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single { .. } => false,
            Self::Multiple { profiles, .. } => profiles.is_empty(),
            Self::Empty { .. } => true,
        }
    }

    /// Flatten into a profile list, consuming the result.
    #[must_use]
    pub fn into_profiles(self) -> Vec<Profile> {
        match self {
            Self::Single { profile, .. } => vec![profile],
            Self::Multiple { profiles, .. } => profiles,
            Self::Empty { .. } => Vec::new(),
        }
    }

    /// Borrow the debug payload, if one was attached.
    #[must_use]
    pub const fn debug(&self) -> Option<&DebugInfo> {
        match self {
            Self::Single { debug, .. }
            | Self::Multiple { debug, .. }
            | Self::Empty { debug, .. } => debug.as_ref(),
        }
    }
}
