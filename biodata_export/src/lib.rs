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

//! Serialization of profile lists to JSON and CSV.
//!
//! Profiles are ragged: each carries only the fields its source segment
//! had. JSON export wraps them in an envelope with a count and timestamp;
//! CSV export flattens them over the union of keys in first-seen order.

use biodata_core::Profile;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

/// Export failure.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Nothing to export.
    #[error("profile list is empty")]
    Empty,

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    profiles: &'a [Profile],
    total_count: usize,
    extracted_at: String,
}

/// Serialize profiles to pretty-printed JSON with a count and timestamp
/// envelope.
pub fn to_json(profiles: &[Profile]) -> Result<String, ExportError> {
    if profiles.is_empty() {
        return Err(ExportError::Empty);
    }

    let envelope = JsonEnvelope {
        profiles,
        total_count: profiles.len(),
        extracted_at: Utc::now().to_rfc3339(),
    };
    debug!(count = profiles.len(), "exporting profiles as JSON");
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Serialize profiles to CSV.
///
/// Columns are the union of keys across all profiles, ordered by first
/// appearance. Missing fields are empty cells; fields containing commas,
/// quotes or newlines are quoted RFC-4180 style.
pub fn to_csv(profiles: &[Profile]) -> Result<String, ExportError> {
    if profiles.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut columns: Vec<&str> = Vec::new();
    for profile in profiles {
        for key in profile.keys() {
            if !columns.contains(&key) {
                columns.push(key);
            }
        }
    }

    let mut out = String::new();
    write_row(&mut out, columns.iter().copied());
    for profile in profiles {
        write_row(
            &mut out,
            columns.iter().map(|col| profile.get(col).unwrap_or("")),
        );
    }

    debug!(
        count = profiles.len(),
        columns = columns.len(),
        "exporting profiles as CSV"
    );
    Ok(out)
}

fn write_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        push_escaped(out, field);
    }
    out.push('\n');
}

fn push_escaped(out: &mut String, field: &str) {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
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

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn json_envelope_carries_count_and_timestamp() {
        let profiles = vec![
            profile(&[("name", "Dharanidhar"), ("income", "04.80 LPA")]),
            profile(&[("name", "Priya")]),
        ];

        let json = to_json(&profiles).expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");

        assert_eq!(value["total_count"], 2);
        assert_eq!(value["profiles"][0]["name"], "Dharanidhar");
        assert!(value["extracted_at"].is_string());
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(matches!(to_json(&[]), Err(ExportError::Empty)));
        assert!(matches!(to_csv(&[]), Err(ExportError::Empty)));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn csv_columns_are_union_in_first_seen_order() {
        let profiles = vec![
            profile(&[("name", "A"), ("income", "04.80 LPA")]),
            profile(&[("name", "B"), ("job", "Engineer")]),
        ];

        let csv = to_csv(&profiles).expect("export should succeed");
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("name,income,job"));
        assert_eq!(lines.next(), Some("A,04.80 LPA,"));
        assert_eq!(lines.next(), Some("B,,Engineer"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn csv_quotes_fields_with_commas_and_quotes() {
        let profiles = vec![profile(&[
            ("name", "A"),
            ("address", "Block No 6, F-51, TSIIC Colony"),
            ("requirements", "wants \"MBA\" match"),
        ])];

        let csv = to_csv(&profiles).expect("export should succeed");
        let row = csv.lines().nth(1).expect("data row exists");

        assert_eq!(
            row,
            "A,\"Block No 6, F-51, TSIIC Colony\",\"wants \"\"MBA\"\" match\""
        );
    }
}
