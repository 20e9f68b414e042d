//! Date and income normalizers.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// First run of digit/decimal-point characters in a cleaned income string.
#[expect(clippy::expect_used, reason = "pattern is a literal known to compile")]
static NUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\d.]+").expect("numeric-run pattern compiles"));

/// Parse a date-of-birth value: `DD-MM-YYYY` first, then `DD/MM/YYYY`.
///
/// Anything else is absence, never an error.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%d-%m-%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}

/// Extract a numeric income figure, in lakhs per annum, from a free-text
/// value. Absence and unparseable input both yield zero.
///
/// Unit handling follows the source convention: `LPA` figures are already
/// lakhs per annum; `PER MONTH` figures are monthly rupees, converted via
/// ×12 ÷ 100000; anything else is returned as parsed with no unit
/// inference. `K` is substituted with `000` textually, even mid-word, as a
/// deliberate reproduction of the source behavior.
#[must_use]
pub fn parse_income(value: Option<&str>) -> f64 {
    let Some(raw) = value else {
        return 0.0;
    };
    if raw.is_empty() {
        return 0.0;
    }

    let upper = raw.to_uppercase();
    let cleaned = upper
        .replace("LPA", "")
        .replace("PER MONTH", "")
        .replace('K', "000");

    let Some(run) = NUMERIC_RUN.find(&cleaned) else {
        return 0.0;
    };
    let Ok(figure) = run.as_str().parse::<f64>() else {
        // A run like "..." matches the pattern but is not a number.
        return 0.0;
    };

    if upper.contains("LPA") {
        figure
    } else if upper.contains("PER MONTH") {
        (figure * 12.0) / 100_000.0
    } else {
        figure
    }
}
