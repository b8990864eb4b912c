//! # rollmd-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the core data structures for `rollmd`.
//! It contains only data types and Serde definitions.
//!
//! ## What belongs here
//! * Pure data structs (`FilmEntry`, `ParseWarning`)
//! * The per-entry dialect marker
//! * Serialization/Deserialization logic
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Parsing or rendering logic

use serde::{Deserialize, Serialize};

/// Which line syntax an entry block was written in.
///
/// The dialect is decided by the entry's header line and governs which
/// classifier handles the entry's sub-lines; the two dialects use different
/// field-key vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Legacy free-text sub-lines ("loaded 01/23/23", "shot in ...").
    Old,
    /// "Key: Value" sub-lines.
    New,
}

/// One film roll's structured metadata.
///
/// All fields are text; an empty string means "not recorded". Empty fields
/// render as "None" downstream, except Developed Location which takes an
/// institutional default at render time.
///
/// `quantity` is a count prefix like "1x"/"2x" extracted from the header
/// line. It has no output column of its own and is folded back into the
/// rendered Filmstock line so it is never lost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmEntry {
    pub filmstock: String,
    pub iso: String,
    pub exposures: String,
    pub expiration: String,
    pub loaded_date: String,
    pub camera: String,
    pub lens: String,
    pub filter: String,
    pub notes: String,
    pub subject: String,
    pub shot_location: String,
    pub ready_date: String,
    pub developed_date: String,
    pub developed_location: String,
    pub roll_num: String,
    pub quantity: String,
}

impl FilmEntry {
    /// Append a fragment to the notes accumulator.
    ///
    /// Notes are append-only and semicolon-joined in the order fragments
    /// arrive. This is the no-data-loss backstop: anything a classifier
    /// cannot confidently map to a typed field lands here. Empty fragments
    /// are ignored.
    pub fn push_note(&mut self, fragment: &str) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return;
        }
        if self.notes.is_empty() {
            self.notes = fragment.to_string();
        } else {
            self.notes.push_str("; ");
            self.notes.push_str(fragment);
        }
    }

    /// Whether this entry carries nothing worth keeping.
    ///
    /// An entry with no filmstock, quantity, or notes at flush time is a
    /// stray block and is dropped by the segmenter.
    pub fn is_empty_stray(&self) -> bool {
        self.filmstock.is_empty() && self.quantity.is_empty() && self.notes.is_empty()
    }
}

/// A diagnostic emitted while scanning the input document.
///
/// Warnings go to a diagnostic stream, never into the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number in the input document.
    pub line: usize,
    pub message: String,
}
