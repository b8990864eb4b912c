//! Old-dialect line classifier.
//!
//! Legacy blocks carry free-text sub-lines ("loaded 01/23/23", "shot in
//! black Minolta with 28mm around SE Portland flowers"). The classifier is
//! an explicitly ordered list of (predicate, handler) rules evaluated
//! top-to-bottom, first match wins. The final rule matches everything and
//! preserves the line to notes, so no input text is ever dropped.

use regex::Regex;
use std::sync::LazyLock;

use rollmd_camera::CameraCatalog;
use rollmd_types::FilmEntry;

use crate::LineOutcome;
use crate::heuristics::looks_like_lens;

static EXPOSURES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d+)\s+exposures?\b").expect("valid regex literal"));

static EXPIRATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^expiration:?\s*").expect("valid regex literal"));

static PREPOSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:around|at|in)\s+").expect("valid regex literal"));

static WITH_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwith\s+(?P<with>.+)$").expect("valid regex literal"));

/// One sub-entry line, pre-lowered once for the predicates.
pub struct LineCtx<'a> {
    content: &'a str,
    lower: String,
}

impl<'a> LineCtx<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            lower: content.to_lowercase(),
        }
    }
}

/// A single classification rule: a cheap predicate plus a handler.
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&LineCtx) -> bool,
    pub apply: fn(&LineCtx, &mut FilmEntry, &CameraCatalog) -> LineOutcome,
}

fn m_iso(c: &LineCtx) -> bool {
    c.lower.starts_with("iso ")
}

fn m_exposures(c: &LineCtx) -> bool {
    EXPOSURES.is_match(c.content)
}

fn m_expiration(c: &LineCtx) -> bool {
    c.lower.contains("expiration") || c.lower.starts_with("expires")
}

fn m_loaded(c: &LineCtx) -> bool {
    c.lower.starts_with("loaded ")
}

fn m_shot_on(c: &LineCtx) -> bool {
    c.lower.starts_with("shot on ")
}

fn m_shot(c: &LineCtx) -> bool {
    c.lower.starts_with("shot ")
}

fn m_ready(c: &LineCtx) -> bool {
    c.lower.contains("ready")
}

fn m_developed(c: &LineCtx) -> bool {
    c.lower.starts_with("developed ")
}

fn m_roll(c: &LineCtx) -> bool {
    c.lower.starts_with("roll ")
}

fn m_location(c: &LineCtx) -> bool {
    c.lower.starts_with("at ") || c.lower.starts_with("around ") || c.lower.starts_with("in ")
}

fn m_subject(c: &LineCtx) -> bool {
    c.lower.starts_with("subject")
}

fn m_filter(c: &LineCtx) -> bool {
    c.lower.starts_with("filter")
}

fn m_notes(c: &LineCtx) -> bool {
    c.lower.starts_with("notes")
}

fn m_always(_: &LineCtx) -> bool {
    true
}

fn apply_iso(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    entry.iso = c.content[4..].trim().to_string();
    LineOutcome::Typed { rule: "iso" }
}

fn apply_exposures(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    if let Some(caps) = EXPOSURES.captures(c.content) {
        entry.exposures = caps[1].to_string();
    }
    LineOutcome::Typed { rule: "exposures" }
}

fn apply_expiration(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    let stripped;
    let raw_val: &str = if c.lower.starts_with("expires") {
        c.content
            .split_once(' ')
            .map(|(_, rest)| rest)
            .unwrap_or("")
    } else {
        stripped = EXPIRATION_PREFIX.replace(c.content, "");
        &stripped
    };
    let raw_val = raw_val.trim();

    if raw_val.is_empty() || raw_val.to_lowercase().contains("unknown") {
        // Cannot determine a date; keep the detail, leave the field to
        // render as "None".
        let detail = if raw_val.is_empty() { "Unknown" } else { raw_val };
        entry.push_note(&format!("Expiration info: {detail}"));
        LineOutcome::Noted { rule: "expiration" }
    } else {
        entry.expiration = rollmd_dates::normalize(raw_val);
        LineOutcome::Typed { rule: "expiration" }
    }
}

fn apply_loaded(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    let loaded_text = c.content[7..].trim();

    if let Some(date) = rollmd_dates::extract(loaded_text) {
        entry.loaded_date = rollmd_dates::normalize(date);
    }

    // "loaded ... in CAMERA with LENS" or "loaded on DATE".
    if let Some((_, segment)) = loaded_text.split_once(" in ") {
        if let Some((camera, lens)) = segment.split_once(" with ") {
            entry.camera = camera.trim().to_string();
            entry.lens = lens.trim().to_string();
        } else {
            entry.camera = segment.trim().to_string();
        }
    } else if let Some((_, after)) = loaded_text.split_once("on ") {
        if let Some(date) = rollmd_dates::extract(after) {
            entry.loaded_date = rollmd_dates::normalize(date);
        }
    }
    LineOutcome::Typed { rule: "loaded" }
}

fn apply_shot_on(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    entry.camera = c.content[8..].trim().to_string();
    LineOutcome::Typed { rule: "shot_on" }
}

fn apply_shot(c: &LineCtx, entry: &mut FilmEntry, cameras: &CameraCatalog) -> LineOutcome {
    let shot_text = c.content[5..].trim();
    let mut noted = false;

    // The trailing preposition phrase is the shot location. Taking the LAST
    // "around/at/in" keeps "shot in CAMERA with LENS around PLACE" intact:
    // the leading "in ..." belongs to the camera, not the location.
    let mut rest = shot_text;
    if let Some(m) = PREPOSITION.find_iter(shot_text).last() {
        let loc = shot_text[m.end()..].trim();
        if !loc.is_empty() {
            entry.shot_location = loc.to_string();
            rest = shot_text[..m.start()].trim();
        }
    }

    if let Some(caps) = WITH_CLAUSE.captures(rest) {
        let with_val = caps["with"].trim();
        let before = caps
            .get(0)
            .map(|m| rest[..m.start()].trim())
            .unwrap_or(rest);
        if let Some(camera) = cameras.find_in_text(with_val) {
            entry.camera = camera.to_string();
        } else if looks_like_lens(with_val) {
            entry.lens = with_val.to_string();
        } else {
            entry.push_note(c.content);
            noted = true;
        }
        // "shot in CAMERA with ...": the camera sits before the clause.
        if entry.camera.is_empty()
            && let Some(camera) = cameras.find_in_text(before)
        {
            entry.camera = camera.to_string();
        }
    } else if let Some(camera) = cameras.find_in_text(rest) {
        entry.camera = camera.to_string();
    }

    // Nothing confidently extracted: preserve the whole sentence once.
    if !noted
        && entry.shot_location.is_empty()
        && entry.camera.is_empty()
        && entry.lens.is_empty()
    {
        entry.push_note(c.content);
        noted = true;
    }

    if noted {
        LineOutcome::Noted { rule: "shot" }
    } else {
        LineOutcome::Typed { rule: "shot" }
    }
}

fn apply_ready(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    if let Some(date) = rollmd_dates::extract(c.content) {
        entry.ready_date = rollmd_dates::normalize(date);
        LineOutcome::Typed { rule: "ready" }
    } else {
        entry.push_note(c.content);
        LineOutcome::Noted { rule: "ready" }
    }
}

fn apply_developed(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    let dev_text = c.content[10..].trim();
    let mut typed = false;

    if let Some(date) = rollmd_dates::extract(dev_text) {
        entry.developed_date = rollmd_dates::normalize(date);
        typed = true;
    }
    if let Some((_, location)) = dev_text.split_once(" at ") {
        entry.developed_location = location.trim().to_string();
        typed = true;
    }

    if typed {
        LineOutcome::Typed { rule: "developed" }
    } else {
        entry.push_note(c.content);
        LineOutcome::Noted { rule: "developed" }
    }
}

fn apply_roll(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    entry.roll_num = c.content[5..].trim().to_string();
    LineOutcome::Typed { rule: "roll" }
}

fn apply_location(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    // Keep the preposition; the phrasing is natural as written.
    entry.shot_location = c.content.trim().to_string();
    LineOutcome::Typed { rule: "location" }
}

fn apply_subject(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    entry.subject = explicit_value(c.content, "subject".len());
    LineOutcome::Typed { rule: "subject" }
}

fn apply_filter(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    entry.filter = explicit_value(c.content, "filter".len());
    LineOutcome::Typed { rule: "filter" }
}

fn apply_notes(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    let val = explicit_value(c.content, "notes".len());
    entry.push_note(&val);
    LineOutcome::Noted { rule: "notes" }
}

fn apply_fallback(c: &LineCtx, entry: &mut FilmEntry, _: &CameraCatalog) -> LineOutcome {
    entry.push_note(c.content);
    LineOutcome::Noted { rule: "fallback" }
}

/// "subject: X" / "subject X" both yield "X".
fn explicit_value(content: &str, keyword_len: usize) -> String {
    match content.split_once(':') {
        Some((_, rest)) => rest.trim().to_string(),
        None => content[keyword_len.min(content.len())..].trim().to_string(),
    }
}

/// The old-dialect rule cascade. Order is the contract: earlier rules win.
const OLD_RULES: &[Rule] = &[
    Rule { name: "iso", matches: m_iso, apply: apply_iso },
    Rule { name: "exposures", matches: m_exposures, apply: apply_exposures },
    Rule { name: "expiration", matches: m_expiration, apply: apply_expiration },
    Rule { name: "loaded", matches: m_loaded, apply: apply_loaded },
    Rule { name: "shot_on", matches: m_shot_on, apply: apply_shot_on },
    Rule { name: "shot", matches: m_shot, apply: apply_shot },
    Rule { name: "ready", matches: m_ready, apply: apply_ready },
    Rule { name: "developed", matches: m_developed, apply: apply_developed },
    Rule { name: "roll", matches: m_roll, apply: apply_roll },
    Rule { name: "location", matches: m_location, apply: apply_location },
    Rule { name: "subject", matches: m_subject, apply: apply_subject },
    Rule { name: "filter", matches: m_filter, apply: apply_filter },
    Rule { name: "notes", matches: m_notes, apply: apply_notes },
    Rule { name: "fallback", matches: m_always, apply: apply_fallback },
];

/// Classify one de-prefixed old-dialect sub-line into `entry`.
pub fn classify_old(content: &str, entry: &mut FilmEntry, cameras: &CameraCatalog) -> LineOutcome {
    let ctx = LineCtx::new(content.trim());
    for rule in OLD_RULES {
        if (rule.matches)(&ctx) {
            return (rule.apply)(&ctx, entry, cameras);
        }
    }
    // The fallback rule matches unconditionally.
    unreachable!("rule cascade ends with a catch-all")
}
