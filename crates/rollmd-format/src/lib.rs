//! # rollmd-format
//!
//! **Tier 3 (Rendering)**
//!
//! Renders finalized film entries into the canonical markdown schema:
//! fifteen fixed fields per block, every field present, "None" standing in
//! for anything the author never recorded. Rendering applies output-time
//! defaults only; it never edits the entry.
//!
//! ## What belongs here
//!
//! - The canonical block schema and its field order.
//! - Output-time defaults (empty developed location, "None" placeholders).
//!
//! ## What does NOT belong here
//!
//! - Parsing or field correction (`rollmd-parse`).
//! - Entry counting and validation (`rollmd-gate`).

use rollmd_types::FilmEntry;

/// Where rolls go to be developed when the log does not say.
pub const DEVELOPED_LOCATION_DEFAULT: &str = "Citizens PDX";

fn or_none(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { "None" } else { trimmed }
}

/// Render one entry as a canonical markdown block, without a trailing
/// newline.
///
/// The filmstock header folds the quantity back in ("1x Kodak Gold") so
/// the count recorded in old-dialect headers is not lost. An empty
/// developed location renders as [`DEVELOPED_LOCATION_DEFAULT`]; the
/// entry itself is left untouched.
pub fn render_entry(entry: &FilmEntry) -> String {
    let filmstock_display = {
        let joined = [entry.quantity.trim(), entry.filmstock.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() { "None".to_string() } else { joined }
    };

    let developed_location = {
        let trimmed = entry.developed_location.trim();
        if trimmed.is_empty() { DEVELOPED_LOCATION_DEFAULT } else { trimmed }
    };

    let lines = [
        format!("- Filmstock: {filmstock_display}"),
        format!("    - ISO: {}", or_none(&entry.iso)),
        format!("    - Exposures: {}", or_none(&entry.exposures)),
        format!("    - Expiration: {}", or_none(&entry.expiration)),
        format!("    - Loaded Date: {}", or_none(&entry.loaded_date)),
        format!("    - Camera: {}", or_none(&entry.camera)),
        format!("    - Lens: {}", or_none(&entry.lens)),
        format!("    - Filter: {}", or_none(&entry.filter)),
        format!("    - Notes: {}", or_none(&entry.notes)),
        format!("    - Subject: {}", or_none(&entry.subject)),
        format!("    - Shot Location: {}", or_none(&entry.shot_location)),
        format!(
            "    - Ready for Development Date: {}",
            or_none(&entry.ready_date)
        ),
        format!("    - Developed Date: {}", or_none(&entry.developed_date)),
        format!("    - Developed Location: {developed_location}"),
        format!("    - RollNum: {}", or_none(&entry.roll_num)),
    ];
    lines.join("\n")
}

/// Render a whole catalog: blocks in order, separated by blank lines, with
/// a single trailing newline. An empty catalog renders as the empty
/// string.
pub fn render_document(entries: &[FilmEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let blocks: Vec<String> = entries.iter().map(render_entry).collect();
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_renders_all_nones_and_the_lab_default() {
        let rendered = render_entry(&FilmEntry::default());
        assert!(rendered.starts_with("- Filmstock: None\n"));
        assert!(rendered.contains("    - ISO: None"));
        assert!(rendered.contains("    - RollNum: None"));
        assert!(rendered.contains("    - Developed Location: Citizens PDX"));
        assert_eq!(rendered.lines().count(), 15);
    }

    #[test]
    fn quantity_folds_into_filmstock_line() {
        let entry = FilmEntry {
            quantity: "1x".to_string(),
            filmstock: "Kodak Gold".to_string(),
            ..FilmEntry::default()
        };
        assert!(render_entry(&entry).starts_with("- Filmstock: 1x Kodak Gold\n"));
    }

    #[test]
    fn filmstock_without_quantity() {
        let entry = FilmEntry {
            filmstock: "Ilford HP5".to_string(),
            ..FilmEntry::default()
        };
        assert!(render_entry(&entry).starts_with("- Filmstock: Ilford HP5\n"));
    }

    #[test]
    fn explicit_developed_location_passes_through() {
        let entry = FilmEntry {
            developed_location: "Blue Moon Camera".to_string(),
            ..FilmEntry::default()
        };
        assert!(
            render_entry(&entry).contains("    - Developed Location: Blue Moon Camera")
        );
    }

    #[test]
    fn whitespace_only_values_render_as_none() {
        let entry = FilmEntry {
            lens: "   ".to_string(),
            developed_location: " ".to_string(),
            ..FilmEntry::default()
        };
        let rendered = render_entry(&entry);
        assert!(rendered.contains("    - Lens: None"));
        assert!(rendered.contains("    - Developed Location: Citizens PDX"));
    }

    #[test]
    fn rendering_does_not_mutate_the_entry() {
        let entry = FilmEntry::default();
        render_entry(&entry);
        assert_eq!(entry.developed_location, "");
    }

    #[test]
    fn document_blocks_separated_by_blank_lines() {
        let entries = vec![FilmEntry::default(), FilmEntry::default()];
        let doc = render_document(&entries);
        assert!(doc.contains("    - RollNum: None\n\n- Filmstock: None"));
        assert!(doc.ends_with("    - RollNum: None\n"));
        assert!(!doc.ends_with("\n\n"));
    }

    #[test]
    fn empty_catalog_renders_empty_string() {
        assert_eq!(render_document(&[]), "");
    }
}
