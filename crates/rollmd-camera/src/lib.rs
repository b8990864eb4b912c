//! # rollmd-camera
//!
//! **Tier 1 (Camera Resolution)**
//!
//! Maps raw free-text camera mentions to a small fixed vocabulary of
//! canonical camera names. The vocabulary is an injected configuration
//! value, not a hidden global, so tests can substitute alternate lists.
//!
//! Resolution is deterministic and total: no input panics, no input is
//! rejected - unresolvable text simply returns `None` and the caller decides
//! what "Unknown" means.

use regex::Regex;
use std::sync::LazyLock;

/// The cameras the source catalogs actually mention.
pub const DEFAULT_CAMERAS: [&str; 5] = [
    "Nikon N80",
    "Minolta SR-T101 silver",
    "Minolta SR-T101 black",
    "Minolta X-700",
    "Halina 35X",
];

static N80_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bn80\b").expect("valid regex literal"));

/// An immutable vocabulary of canonical camera names.
#[derive(Debug, Clone)]
pub struct CameraCatalog {
    names: Vec<String>,
}

impl Default for CameraCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERAS.iter().map(|s| s.to_string()))
    }
}

impl CameraCatalog {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Return the catalog entry equal to `canonical`, if present.
    ///
    /// Nickname heuristics route through this so they only fire for names
    /// actually in the vocabulary.
    fn known(&self, canonical: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.as_str() == canonical)
            .map(String::as_str)
    }

    /// Map a raw camera string to a canonical name.
    ///
    /// Resolution order, first match wins:
    /// 1. exact case-insensitive match
    /// 2. a canonical name appearing as a substring of the raw text
    /// 3. model-number nicknames ("n80", "x700"/"x-700")
    /// 4. Minolta SR-T101 spellings; "black" selects the black body, any
    ///    other spelling defaults to silver (the author's own camera)
    /// 5. bare "Minolta" defaults to the SR-T101 silver
    /// 6. "Halina" alone means the Halina 35X
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let low = text.to_lowercase();

        for cam in &self.names {
            if low == cam.to_lowercase() {
                return Some(cam);
            }
        }

        for cam in &self.names {
            if low.contains(&cam.to_lowercase()) {
                return Some(cam);
            }
        }

        if N80_TOKEN.is_match(&low) {
            if let Some(cam) = self.known("Nikon N80") {
                return Some(cam);
            }
        }

        if low.contains("x-700") || low.contains("x700") {
            if let Some(cam) = self.known("Minolta X-700") {
                return Some(cam);
            }
        }

        let srt101_hint = (low.contains("sr") && low.contains("t101"))
            || low.contains("srt-101")
            || low.contains("srt101")
            || low.contains("sr-t101");
        if low.contains("minolta") && srt101_hint {
            if low.contains("black") {
                if let Some(cam) = self.known("Minolta SR-T101 black") {
                    return Some(cam);
                }
            }
            if let Some(cam) = self.known("Minolta SR-T101 silver") {
                return Some(cam);
            }
        }

        if low.contains("minolta") {
            if let Some(cam) = self.known("Minolta SR-T101 silver") {
                return Some(cam);
            }
        }

        if low.contains("halina") {
            if let Some(cam) = self.known("Halina 35X") {
                return Some(cam);
            }
        }

        None
    }

    /// Search arbitrary prose for any known camera.
    ///
    /// Canonical-name containment is checked first, then the same nickname
    /// heuristics `resolve` uses.
    pub fn find_in_text(&self, text: &str) -> Option<&str> {
        if text.trim().is_empty() {
            return None;
        }
        let low = text.to_lowercase();
        for cam in &self.names {
            if low.contains(&cam.to_lowercase()) {
                return Some(cam);
            }
        }
        self.resolve(text)
    }
}
