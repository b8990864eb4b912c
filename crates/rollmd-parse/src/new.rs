//! New-dialect line classifier.
//!
//! New-format blocks carry "Key: Value" sub-lines. Recognized keys map 1:1
//! to typed fields. Values the normalizer cannot pin down (dates marked
//! unknown, unparseable text) are preserved to notes with the original key
//! name as a prefix so the typed field honestly renders as "None" instead
//! of an invented value. Unknown keys are preserved whole.
//!
//! Camera and lens values are stored raw here; the finalizer owns all
//! camera/location/lens reclassification so the corrections stay in one
//! auditable pass.

use regex::Regex;
use std::sync::LazyLock;

use rollmd_types::FilmEntry;

use crate::LineOutcome;

static FIRST_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid regex literal"));

/// Append "Key: value" to notes, skipping empty values.
fn note_keyed(entry: &mut FilmEntry, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    entry.push_note(&format!("{key}: {value}"));
}

/// Normalize a date-valued key, preserving unparseable text to notes.
fn classify_date_key(
    entry: &mut FilmEntry,
    rule: &'static str,
    label: &str,
    val: &str,
    set: fn(&mut FilmEntry, String),
) -> LineOutcome {
    if val.is_empty() {
        // Recognized key, nothing recorded; renders as "None".
        return LineOutcome::Typed { rule };
    }
    match rollmd_dates::extract(val) {
        Some(date) => {
            set(entry, rollmd_dates::normalize(date));
            LineOutcome::Typed { rule }
        }
        None => {
            note_keyed(entry, label, val);
            LineOutcome::Noted { rule }
        }
    }
}

/// Classify one de-prefixed new-dialect sub-line into `entry`.
pub fn classify_new(content: &str, entry: &mut FilmEntry) -> LineOutcome {
    let content = content.trim();
    if content.is_empty() {
        return LineOutcome::Typed { rule: "blank" };
    }

    let Some((raw_key, raw_val)) = content.split_once(':') else {
        // No key at all: a bare preposition phrase is a location cue,
        // everything else is a note.
        let lower = content.to_lowercase();
        if lower.starts_with("at ") || lower.starts_with("around ") || lower.starts_with("in ") {
            entry.shot_location = content.to_string();
            return LineOutcome::Typed { rule: "location" };
        }
        entry.push_note(content);
        return LineOutcome::Noted { rule: "no_key" };
    };

    let key = raw_key.trim().to_lowercase();
    let val = raw_val.trim();

    match key.as_str() {
        "iso" => {
            entry.iso = val.to_string();
            LineOutcome::Typed { rule: "iso" }
        }
        "exposures" => {
            entry.exposures = FIRST_INT
                .find(val)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| val.to_string());
            LineOutcome::Typed { rule: "exposures" }
        }
        "expiration" => {
            if val.is_empty() || val.to_lowercase().contains("unknown") {
                let detail = if val.is_empty() { "Unknown" } else { val };
                note_keyed(entry, "Expiration", detail);
                LineOutcome::Noted { rule: "expiration" }
            } else {
                entry.expiration = rollmd_dates::normalize(val);
                LineOutcome::Typed { rule: "expiration" }
            }
        }
        "loaded date" => classify_date_key(entry, "loaded_date", "Loaded Date", val, |e, v| {
            e.loaded_date = v;
        }),
        "camera" => {
            // Raw on purpose; the finalizer canonicalizes.
            entry.camera = val.to_string();
            LineOutcome::Typed { rule: "camera" }
        }
        "lens" => {
            entry.lens = val.to_string();
            LineOutcome::Typed { rule: "lens" }
        }
        "filter" => {
            entry.filter = val.to_string();
            LineOutcome::Typed { rule: "filter" }
        }
        "notes" => {
            entry.push_note(val);
            LineOutcome::Typed { rule: "notes" }
        }
        "subject" => {
            entry.subject = val.to_string();
            LineOutcome::Typed { rule: "subject" }
        }
        "shot location" => {
            entry.shot_location = val.to_string();
            LineOutcome::Typed { rule: "shot_location" }
        }
        "ready for development date" => classify_date_key(
            entry,
            "ready_date",
            "Ready for Development Date",
            val,
            |e, v| {
                e.ready_date = v;
            },
        ),
        "developed date" => {
            classify_date_key(entry, "developed_date", "Developed Date", val, |e, v| {
                e.developed_date = v;
            })
        }
        "developed location" => {
            entry.developed_location = val.to_string();
            LineOutcome::Typed { rule: "developed_location" }
        }
        "rollnum" | "roll num" | "roll number" => {
            entry.roll_num = val.to_string();
            LineOutcome::Typed { rule: "roll_num" }
        }
        _ => {
            // Unknown key: preserve "Key: Value" whole.
            note_keyed(entry, raw_key.trim(), val);
            LineOutcome::Noted { rule: "unknown_key" }
        }
    }
}
