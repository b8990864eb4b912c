//! # rollmd-gate
//!
//! **Tier 3 (Validation)**
//!
//! The conversion gate: an independent scan of the raw input counts entry
//! headers, and that count must equal the number of records the parser
//! produced. The scan deliberately shares no code with the segmenter, so
//! a parser bug that swallows an entry shows up as a count mismatch
//! instead of a silently shorter catalog. A mismatch is fatal; the caller
//! must not write output.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Same header shapes the segmenter recognizes: top-level headers with up
// to three leading spaces, plus headers mis-indented as sub-lines, which
// the segmenter promotes to entry starts.
static NEW_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}-\s+Filmstock(?::|\s+.+:\s*$)").expect("valid regex literal")
});

static OLD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s{0,3}-\s+\d+x\s+").expect("valid regex literal"));

static NESTED_NEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-\s+Filmstock\b").expect("valid regex literal"));

static NESTED_OLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-\s+\d+x\b").expect("valid regex literal"));

/// Validation failures. All fatal: a gate error means the output would
/// misrepresent the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("entry count mismatch: {expected} header lines in input, {actual} entries produced")]
    EntryCountMismatch { expected: usize, actual: usize },
}

/// Count intended entries in the raw input by header lines alone, without
/// parsing anything.
pub fn count_entry_headers(content: &str) -> usize {
    content
        .lines()
        .filter(|line| {
            if NEW_HEADER.is_match(line) || OLD_HEADER.is_match(line) {
                return true;
            }
            if line.starts_with("    - ") {
                let trimmed = line.trim();
                return NESTED_NEW.is_match(trimmed) || NESTED_OLD.is_match(trimmed);
            }
            false
        })
        .count()
}

/// Gate a conversion: the parsed entry count must equal the independent
/// header count.
pub fn check_entry_count(content: &str, actual: usize) -> Result<(), GateError> {
    let expected = count_entry_headers(content);
    if expected == actual {
        Ok(())
    } else {
        Err(GateError::EntryCountMismatch { expected, actual })
    }
}
