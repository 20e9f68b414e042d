//! Range/substring predicates over profile lists.

use biodata_core::Profile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::{parse_date, parse_income};

/// Active filter dimensions. Every dimension is independently optional;
/// an absent or empty option means the dimension is not applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterSpec {
    /// Inclusive date-of-birth bounds; either side may be open.
    #[serde(default)]
    pub dob_range: (Option<NaiveDate>, Option<NaiveDate>),

    /// Income bounds in lakhs per annum; either side may be open.
    #[serde(default)]
    pub income_range: (Option<f64>, Option<f64>),

    /// Substring matched against address or place of birth.
    #[serde(default)]
    pub location: Option<String>,

    /// Substring matched against the education field.
    #[serde(default)]
    pub education: Option<String>,

    /// Substring matched against the job field.
    #[serde(default)]
    pub job: Option<String>,
}

impl FilterSpec {
    /// Whether no dimension is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dob_range == (None, None)
            && self.income_range == (None, None)
            && self.location.as_deref().is_none_or(str::is_empty)
            && self.education.as_deref().is_none_or(str::is_empty)
            && self.job.as_deref().is_none_or(str::is_empty)
    }
}

/// Keep the profiles satisfying every active dimension (logical AND).
///
/// Range filters fail open: a profile whose date of birth is missing or
/// unparseable is not excluded by the date dimension, and a profile with
/// no income field passes the income dimension. A present-but-unparseable
/// income evaluates as zero, which a positive lower bound excludes.
/// Substring filters are case-insensitive and treat missing fields as
/// empty strings.
#[must_use]
pub fn filter_profiles(profiles: &[Profile], filters: &FilterSpec) -> Vec<Profile> {
    let kept: Vec<Profile> = profiles
        .iter()
        .filter(|profile| passes(profile, filters))
        .cloned()
        .collect();

    debug!(
        total = profiles.len(),
        kept = kept.len(),
        "applied profile filters"
    );
    kept
}

fn passes(profile: &Profile, filters: &FilterSpec) -> bool {
    passes_dob(profile, filters.dob_range)
        && passes_income(profile, filters.income_range)
        && passes_location(profile, filters.location.as_deref())
        && passes_field(profile, "education", filters.education.as_deref())
        && passes_field(profile, "job", filters.job.as_deref())
}

fn passes_dob(profile: &Profile, (from, to): (Option<NaiveDate>, Option<NaiveDate>)) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    // Missing or unparseable dates pass vacuously.
    let Some(date) = profile.get("date_of_birth").and_then(parse_date) else {
        return true;
    };
    if from.is_some_and(|bound| date < bound) {
        return false;
    }
    if to.is_some_and(|bound| date > bound) {
        return false;
    }
    true
}

fn passes_income(profile: &Profile, (min, max): (Option<f64>, Option<f64>)) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    // An absent income field passes vacuously; an unparseable one is zero.
    let Some(raw) = profile.get("income").filter(|s| !s.is_empty()) else {
        return true;
    };
    let value = parse_income(Some(raw));
    if min.is_some_and(|bound| value < bound) {
        return false;
    }
    if max.is_some_and(|bound| value > bound) {
        return false;
    }
    true
}

fn passes_location(profile: &Profile, needle: Option<&str>) -> bool {
    let Some(needle) = needle.filter(|s| !s.is_empty()) else {
        return true;
    };
    let needle = needle.to_lowercase();
    let address = profile.get("address").unwrap_or("").to_lowercase();
    let pob = profile.get("place_of_birth").unwrap_or("").to_lowercase();
    address.contains(&needle) || pob.contains(&needle)
}

fn passes_field(profile: &Profile, key: &str, needle: Option<&str>) -> bool {
    let Some(needle) = needle.filter(|s| !s.is_empty()) else {
        return true;
    };
    profile
        .get(key)
        .unwrap_or("")
        .to_lowercase()
        .contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(fields: &[(&str, &str)]) -> Profile {
        fields
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn demo_profiles() -> Vec<Profile> {
        vec![
            profile(&[
                ("date_of_birth", "08-02-1979"),
                ("place_of_birth", "HYD"),
                ("name", "Dharanidhar"),
                ("education", "B Sc"),
                ("job", "BITS Pilani Hyd campus Lab Technician"),
                ("income", "04.80 LPA"),
                ("address", "Block No 6, F-51, TSIIC Colony KAPRA HYD 62"),
            ]),
            profile(&[
                ("date_of_birth", "15-05-1985"),
                ("place_of_birth", "Mumbai"),
                ("name", "Priya"),
                ("education", "M Tech"),
                ("job", "Software Engineer"),
                ("income", "12.50 LPA"),
                ("address", "Flat 203, Green Valley Apartments, Bandra Mumbai"),
            ]),
        ]
    }

    #[test]
    fn empty_spec_keeps_everything() {
        let profiles = demo_profiles();
        let spec = FilterSpec::default();
        assert!(spec.is_empty());
        assert_eq!(filter_profiles(&profiles, &spec).len(), 2);
    }

    #[test]
    fn location_matches_address_or_place_of_birth() {
        let profiles = demo_profiles();
        let spec = FilterSpec {
            location: Some("Mumbai".to_string()),
            ..FilterSpec::default()
        };

        let kept = filter_profiles(&profiles, &spec);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("name"), Some("Priya"));

        // HYD appears in Dharanidhar's place of birth and address.
        let spec = FilterSpec {
            location: Some("hyd".to_string()),
            ..FilterSpec::default()
        };
        let kept = filter_profiles(&profiles, &spec);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("name"), Some("Dharanidhar"));
    }

    #[test]
    fn income_lower_bound_keeps_priya() {
        let profiles = demo_profiles();
        let spec = FilterSpec {
            income_range: (Some(10.0), None),
            ..FilterSpec::default()
        };

        let kept = filter_profiles(&profiles, &spec);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("name"), Some("Priya"));
    }

    #[test]
    fn income_upper_bound_keeps_dharanidhar() {
        let profiles = demo_profiles();
        let spec = FilterSpec {
            income_range: (None, Some(5.0)),
            ..FilterSpec::default()
        };

        let kept = filter_profiles(&profiles, &spec);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("name"), Some("Dharanidhar"));
    }

    #[test]
    fn dob_range_bounds_are_inclusive_of_parseable_dates() {
        let profiles = demo_profiles();
        let spec = FilterSpec {
            dob_range: (
                NaiveDate::from_ymd_opt(1979, 1, 1),
                NaiveDate::from_ymd_opt(1980, 12, 31),
            ),
            ..FilterSpec::default()
        };

        let kept = filter_profiles(&profiles, &spec);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("name"), Some("Dharanidhar"));
    }

    #[test]
    fn unparseable_dob_fails_open() {
        let profiles = vec![profile(&[("date_of_birth", "unknown"), ("name", "X")])];
        let spec = FilterSpec {
            dob_range: (NaiveDate::from_ymd_opt(1990, 1, 1), None),
            ..FilterSpec::default()
        };
        assert_eq!(filter_profiles(&profiles, &spec).len(), 1);
    }

    #[test]
    fn missing_income_field_passes_vacuously() {
        let profiles = vec![profile(&[("name", "X")])];
        let spec = FilterSpec {
            income_range: (Some(10.0), None),
            ..FilterSpec::default()
        };
        assert_eq!(filter_profiles(&profiles, &spec).len(), 1);
    }

    #[test]
    fn unparseable_income_counts_as_zero() {
        let profiles = vec![profile(&[("name", "X"), ("income", "negotiable")])];
        let spec = FilterSpec {
            income_range: (Some(1.0), None),
            ..FilterSpec::default()
        };
        assert!(filter_profiles(&profiles, &spec).is_empty());
    }

    #[test]
    fn missing_text_field_never_matches() {
        let profiles = vec![profile(&[("name", "X")])];
        let spec = FilterSpec {
            education: Some("MBA".to_string()),
            ..FilterSpec::default()
        };
        assert!(filter_profiles(&profiles, &spec).is_empty());
    }

    #[test]
    fn dimensions_combine_with_and() {
        let profiles = demo_profiles();
        let spec = FilterSpec {
            location: Some("Mumbai".to_string()),
            education: Some("B Sc".to_string()),
            ..FilterSpec::default()
        };
        assert!(filter_profiles(&profiles, &spec).is_empty());

        let spec = FilterSpec {
            location: Some("Mumbai".to_string()),
            job: Some("engineer".to_string()),
            ..FilterSpec::default()
        };
        let kept = filter_profiles(&profiles, &spec);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].get("name"), Some("Priya"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn spec_round_trips_through_json() {
        let spec = FilterSpec {
            dob_range: (NaiveDate::from_ymd_opt(1980, 1, 1), None),
            income_range: (Some(4.0), Some(20.0)),
            location: Some("Mumbai".to_string()),
            education: None,
            job: None,
        };

        let json = serde_json::to_string(&spec).expect("spec should serialize");
        let back: FilterSpec = serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(back, spec);
    }
}
