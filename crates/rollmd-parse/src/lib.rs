//! # rollmd-parse
//!
//! **Tier 2 (Parsing)**
//!
//! Turns a mixed-dialect film catalog document into ordered `FilmEntry`
//! records. Three pieces cooperate:
//!
//! * the entry segmenter, which finds entry headers, decides the dialect of
//!   each block, and routes sub-lines to the matching classifier;
//! * the per-dialect line classifiers, written as ordered rule lists so the
//!   priority of the heuristics stays auditable;
//! * the finalizer, a post-parse correction pass that untangles fields the
//!   author filed in the wrong place (a location written as the camera, a
//!   camera written as the lens).
//!
//! Nothing here raises on bad input. Text that matches no rule lands in the
//! entry's notes accumulator; lines that belong to no entry become warnings.

pub mod heuristics;

mod finalize;
mod new;
mod old;
mod segment;

pub use finalize::finalize_entry;
pub use new::classify_new;
pub use old::classify_old;
pub use segment::{ParseOutcome, segment};

use rollmd_camera::CameraCatalog;

/// What a classifier did with one sub-entry line.
///
/// Classifiers are total functions; the line always goes somewhere. `Noted`
/// is the success-shaped failure channel: the named rule claimed the line
/// but could not map it to a typed field, so the text was preserved to
/// notes instead. Tests assert on the rule name to pin each heuristic down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The named rule populated at least one typed field.
    Typed { rule: &'static str },
    /// The named rule preserved the line (or part of it) to notes.
    Noted { rule: &'static str },
}

impl LineOutcome {
    pub fn rule(&self) -> &'static str {
        match self {
            LineOutcome::Typed { rule } | LineOutcome::Noted { rule } => rule,
        }
    }
}

/// Segment a document and run the finalizer over every entry.
///
/// This is the whole parse pass: raw text in, finalized records plus
/// diagnostics out. Rendering and validation live in their own crates.
pub fn parse_document(content: &str, cameras: &CameraCatalog) -> ParseOutcome {
    let mut outcome = segment(content, cameras);
    for entry in &mut outcome.entries {
        finalize_entry(entry, cameras);
    }
    outcome
}
