#![warn(
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

//! Normalization and filtering over extracted profiles.
//!
//! Field values stay raw strings in the profile; the normalizers here
//! derive dates and income figures on demand, and the filter applies
//! range/substring predicates over a profile list. Malformed values never
//! raise: dates degrade to absence, income degrades to zero, and filters
//! fail open accordingly.

mod filter;
mod normalize;

pub use filter::{FilterSpec, filter_profiles};
pub use normalize::{parse_date, parse_income};
