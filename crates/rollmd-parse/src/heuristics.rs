//! Shared free-text heuristics: what looks like a lens, what looks like a
//! location. Used by both the old-dialect classifier and the finalizer so
//! the two stay in agreement.

use regex::Regex;
use std::sync::LazyLock;

static FOCAL_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{2,3}\s*mm\b").expect("valid regex literal"));

static F_STOP_SLASHED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bf\s*/?\s*\d+(\.\d+)?").expect("valid regex literal"));

static F_STOP_TIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bf\d+(\.\d+)?").expect("valid regex literal"));

static LOCATION_LEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:around|at|in)\b").expect("valid regex literal"));

/// Whether a fragment reads like a lens description.
///
/// Accepts the word "lens" itself, a few lens-only nouns, focal lengths
/// ("28mm", "300 mm"), and f-stop spellings ("f2.5", "f/2.5", "f 2.8").
pub fn looks_like_lens(text: &str) -> bool {
    if text.trim().is_empty() {
        return false;
    }
    let low = text.to_lowercase();
    if low.contains("lens")
        || low.contains("fisheye")
        || low.contains("teleconverter")
        || low.contains("pancake")
    {
        return true;
    }
    FOCAL_LENGTH.is_match(&low) || F_STOP_SLASHED.is_match(&low) || F_STOP_TIGHT.is_match(&low)
}

/// Whether text is a location phrase rather than a camera: a leading
/// "around"/"at"/"in" preposition is the tell.
pub fn is_location_phrase(text: &str) -> bool {
    !text.trim().is_empty() && LOCATION_LEAD.is_match(text.trim())
}
