//! # rollmd-dates
//!
//! **Tier 1 (Date Normalization)**
//!
//! Normalizes the date spellings that appear in hand-written film catalogs
//! into `YYYY-MM-DD`, and locates date-ish substrings inside free text.
//!
//! This is deliberately not a general date library: the grammar covers only
//! the formats the source logs are known to use. Unrecognized text passes
//! through unchanged so nothing the author wrote is invented or lost.
//!
//! ## What belongs here
//! * `normalize` - raw date text to canonical form
//! * `extract` - first date-ish substring of a sentence
//!
//! ## What does NOT belong here
//! * Field classification
//! * Calendar arithmetic or validation (a written "02/30/24" is kept as-is
//!   once normalized; the catalog records what the author wrote)

use regex::Regex;
use std::sync::LazyLock;

// Flexible pattern matching any date spelling the catalogs use:
// 01/23/23, 1-2-2023, 2023-01-23, "Apr 1, 2023", "1 Apr 2023".
static DATE_ANYWHERE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\d{4}-\d{1,2}-\d{1,2}|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{2,4}|\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{2,4})",
    )
    .expect("valid regex literal")
});

static LIKELY_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)likely\s+(\d{4})").expect("valid regex literal"));

static EXPIRY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:expiration|expires):?\s*").expect("valid regex literal"));

static ISO_YMD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid regex literal"));

static MDY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})$").expect("valid regex literal")
});

static MONTH_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[/-](\d{2,4})$").expect("valid regex literal"));

static NAME_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)\s+(\d{1,2}),?\s+(\d{2,4})$").expect("valid regex literal")
});

static DAY_NAME_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s+([A-Za-z]+)\s+(\d{2,4})$").expect("valid regex literal")
});

fn month_number(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "jan" | "january" => Some("01"),
        "feb" | "february" => Some("02"),
        "mar" | "march" => Some("03"),
        "apr" | "april" => Some("04"),
        "may" => Some("05"),
        "jun" | "june" => Some("06"),
        "jul" | "july" => Some("07"),
        "aug" | "august" => Some("08"),
        "sep" | "sept" | "september" => Some("09"),
        "oct" | "october" => Some("10"),
        "nov" | "november" => Some("11"),
        "dec" | "december" => Some("12"),
        _ => None,
    }
}

/// Zero-pad a captured 1-2 digit field to two digits.
fn pad2(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "00".to_string()
    } else {
        format!("{trimmed:0>2}")
    }
}

/// Expand a two-digit year; years through 30 are 20xx, later ones 19xx.
fn expand_year(year: &str) -> String {
    if year.len() == 2 {
        let century = if year.parse::<u32>().map(|y| y <= 30).unwrap_or(false) {
            "20"
        } else {
            "19"
        };
        format!("{century}{year}")
    } else {
        year.to_string()
    }
}

/// Find the first date-ish substring of `text`, if any.
pub fn extract(text: &str) -> Option<&str> {
    DATE_ANYWHERE.find(text).map(|m| m.as_str())
}

/// Normalize a raw date string.
///
/// Returns one of:
/// * `""` for empty input
/// * `"Unknown"` or `"Unknown, likely YYYY"` when the author marked the
///   date unknown (the likely-year qualifier is preserved)
/// * `"YYYY-MM-DD"` for the recognized formats; month/year spellings like
///   `09/2025` normalize to the first of the month
/// * the original text, trimmed, when no format matches
///
/// Total and deterministic; never panics on uncurated text.
pub fn normalize(raw: &str) -> String {
    let ds = raw.trim();
    if ds.is_empty() {
        return String::new();
    }

    if ds.to_lowercase().contains("unknown") {
        if let Some(caps) = LIKELY_YEAR.captures(ds) {
            return format!("Unknown, likely {}", &caps[1]);
        }
        return "Unknown".to_string();
    }

    // Leading "expiration"/"expires" prefixes are noise from the old dialect.
    let cleaned = EXPIRY_PREFIX.replace(ds, "");
    let cleaned = cleaned.trim();

    if let Some(caps) = ISO_YMD.captures(cleaned) {
        return format!("{}-{}-{}", &caps[1], pad2(&caps[2]), pad2(&caps[3]));
    }

    if let Some(caps) = MDY.captures(cleaned) {
        return format!(
            "{}-{}-{}",
            expand_year(&caps[3]),
            pad2(&caps[1]),
            pad2(&caps[2])
        );
    }

    if let Some(caps) = MONTH_YEAR.captures(cleaned) {
        return format!("{}-{}-01", expand_year(&caps[2]), pad2(&caps[1]));
    }

    if let Some(caps) = NAME_DAY_YEAR.captures(cleaned)
        && let Some(month) = month_number(&caps[1])
    {
        return format!("{}-{}-{}", expand_year(&caps[3]), month, pad2(&caps[2]));
    }

    if let Some(caps) = DAY_NAME_YEAR.captures(cleaned)
        && let Some(month) = month_number(&caps[2])
    {
        return format!("{}-{}-{}", expand_year(&caps[3]), month, pad2(&caps[1]));
    }

    ds.to_string()
}
