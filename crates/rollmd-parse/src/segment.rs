//! Entry segmenter.
//!
//! Walks the document line by line, opens a new entry at each header,
//! routes "    - " sub-lines to the classifier matching the open block's
//! dialect, and folds any other in-block text into notes. Headers the
//! author accidentally nested inside a block (indented like a sub-line)
//! are promoted to real entry starts so no roll is silently merged into
//! its neighbor.

use regex::Regex;
use std::sync::LazyLock;

use rollmd_camera::CameraCatalog;
use rollmd_types::{Dialect, FilmEntry, ParseWarning};

use crate::{new, old};

// Top-level headers tolerate up to three leading spaces, per the loosest
// indentation observed in the source logs.
static NEW_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}-\s+Filmstock(?::|\s+.+:\s*$)").expect("valid regex literal")
});

static OLD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s{0,3}-\s+\d+x\s+").expect("valid regex literal"));

// Value captures; also applied to trimmed promoted headers, whose leading
// indent is gone by then.
static NEW_VALUE_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}-\s+Filmstock:\s*(.+?)\s*$").expect("valid regex literal")
});

static NEW_VALUE_TRAILING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s{0,3}-\s+Filmstock\s+(.+?):\s*$").expect("valid regex literal")
});

static OLD_CAPTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s{0,3}-\s+(?P<qty>\d+x)\s+(?P<name>.+)$").expect("valid regex literal")
});

static QTY_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?P<qty>\d+x)\s+(?P<name>.+)$").expect("valid regex literal")
});

// Mis-nested header detection, run on the trimmed text of sub-line
// candidates.
static NESTED_NEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-\s+Filmstock\b").expect("valid regex literal"));

static NESTED_OLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^-\s+\d+x\b").expect("valid regex literal"));

const SUB_PREFIX: &str = "    - ";

/// Everything the segmentation pass produces: records in input order plus
/// line-anchored diagnostics for text that belonged to no entry.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub entries: Vec<FilmEntry>,
    pub warnings: Vec<ParseWarning>,
}

struct Segmenter {
    outcome: ParseOutcome,
    current: Option<FilmEntry>,
    dialect: Dialect,
}

impl Segmenter {
    fn new() -> Self {
        Segmenter {
            outcome: ParseOutcome::default(),
            current: None,
            dialect: Dialect::Old,
        }
    }

    /// Close the open block. An entry with no filmstock, quantity, or
    /// notes carries nothing worth keeping and is dropped; the validator
    /// catches the count drift if a real header produced one.
    fn flush(&mut self) {
        if let Some(entry) = self.current.take()
            && !entry.is_empty_stray()
        {
            self.outcome.entries.push(entry);
        }
    }

    fn open(&mut self, dialect: Dialect, entry: FilmEntry) {
        self.flush();
        self.dialect = dialect;
        self.current = Some(entry);
    }
}

/// Extract the filmstock value from a new-dialect header, covering both
/// the "- Filmstock: VALUE" and "- Filmstock VALUE:" spellings.
fn new_header_value(line: &str) -> String {
    if let Some(caps) = NEW_VALUE_INLINE.captures(line) {
        return caps[1].trim().trim_end_matches(':').to_string();
    }
    if let Some(caps) = NEW_VALUE_TRAILING.captures(line) {
        return caps[1].trim().to_string();
    }
    String::new()
}

/// Build an entry from a header's filmstock value, splitting a leading
/// quantity token ("1x Kodak Gold") when present.
fn entry_from_value(value: &str) -> FilmEntry {
    let mut entry = FilmEntry::default();
    match QTY_SPLIT.captures(value) {
        Some(caps) => {
            entry.quantity = caps["qty"].trim().to_string();
            entry.filmstock = caps["name"].trim().to_string();
        }
        None => entry.filmstock = value.to_string(),
    }
    entry
}

fn entry_from_old_header(line: &str) -> FilmEntry {
    let mut entry = FilmEntry::default();
    if let Some(caps) = OLD_CAPTURE.captures(line) {
        entry.quantity = caps["qty"].trim().to_string();
        entry.filmstock = caps["name"].trim().to_string();
    }
    entry
}

/// Segment a document into ordered entries, routing each sub-line to the
/// open block's dialect classifier. Never fails; unplaceable text becomes
/// a warning.
pub fn segment(content: &str, cameras: &CameraCatalog) -> ParseOutcome {
    let mut seg = Segmenter::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        if NEW_HEADER.is_match(line) {
            seg.open(Dialect::New, entry_from_value(&new_header_value(line)));
            continue;
        }
        if OLD_HEADER.is_match(line) {
            seg.open(Dialect::Old, entry_from_old_header(line));
            continue;
        }

        if let Some(sub) = line.strip_prefix(SUB_PREFIX) {
            let trimmed = line.trim();
            // A header the author indented as a sub-line starts a fresh
            // entry, whether or not a block is open.
            if NESTED_NEW.is_match(trimmed) {
                seg.open(Dialect::New, entry_from_value(&new_header_value(trimmed)));
                continue;
            }
            if NESTED_OLD.is_match(trimmed) {
                seg.open(Dialect::Old, entry_from_old_header(trimmed));
                continue;
            }

            if let Some(entry) = seg.current.as_mut() {
                match seg.dialect {
                    Dialect::Old => {
                        old::classify_old(sub, entry, cameras);
                    }
                    Dialect::New => {
                        new::classify_new(sub, entry);
                    }
                }
                continue;
            }
        } else if let Some(entry) = seg.current.as_mut() {
            // In-block text without the sub-line prefix still belongs to
            // the roll; keep it rather than lose it.
            entry.push_note(line.trim());
            continue;
        }

        let shown: String = line.chars().take(80).collect();
        seg.outcome.warnings.push(ParseWarning {
            line: line_num,
            message: format!("Unrecognized top-level line: {shown}"),
        });
    }

    seg.flush();
    seg.outcome
}
