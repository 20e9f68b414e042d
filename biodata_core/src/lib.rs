#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Core extraction pipeline for semi-structured biodata documents.
//!
//! Biodata sheets carry field labels in ALL CAPS followed by free-text
//! values, with no delimiters or per-line structure. This crate turns such
//! text into structured profiles: tokenize, scan for labels from a fixed
//! vocabulary, collect value runs, and split multi-profile documents on a
//! boundary label.

pub mod extraction;
mod profile;
mod result;

pub use extraction::engine::ExtractionEngine;
pub use extraction::scanner::scan;
pub use extraction::splitter::{BoundaryPredicate, LabelBoundary};
pub use extraction::tokenizer::tokenize;
pub use extraction::vocabulary::Vocabulary;
pub use profile::{DuplicatePolicy, Profile};
pub use result::{DebugInfo, ExtractionResult};
