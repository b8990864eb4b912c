//! Post-parse correction pass.
//!
//! Classifiers record what each line said; this pass fixes what the author
//! meant. It runs once per entry, after every sub-line has been consumed,
//! so corrections can see the whole record instead of guessing line by
//! line. Every displaced raw value is preserved to notes before its field
//! is rewritten.

use rollmd_camera::CameraCatalog;
use rollmd_types::FilmEntry;

use crate::heuristics;

/// Correct cross-field misfiles, then canonicalize the camera.
///
/// Order matters: the location-in-camera and camera-in-lens swaps run
/// before canonicalization so a rescued camera name gets the same
/// treatment as one filed correctly.
pub fn finalize_entry(entry: &mut FilmEntry, cameras: &CameraCatalog) {
    // A location phrase filed under Camera moves to the shot location.
    if heuristics::is_location_phrase(&entry.camera) {
        let raw = entry.camera.trim().to_string();
        entry.push_note(&format!("Camera (raw -> location): {raw}"));
        if entry.shot_location.is_empty() {
            entry.shot_location = raw;
        }
        entry.camera = String::new();
    }

    // A camera name filed under Lens moves to the camera, overriding
    // whatever was there. The lens value only survives if it still reads
    // like a lens once the camera is out.
    if !entry.lens.is_empty()
        && let Some(found) = cameras.find_in_text(&entry.lens)
    {
        let found = found.to_string();
        if !heuristics::looks_like_lens(&entry.lens) {
            let raw = entry.lens.trim().to_string();
            entry.push_note(&format!("Lens (raw contained camera): {raw}"));
            entry.lens = String::new();
        }
        entry.camera = found;
    }

    if entry.camera.trim().is_empty() {
        // Last resort: a camera mentioned in passing inside the notes.
        entry.camera = match cameras.find_in_text(&entry.notes) {
            Some(found) => found.to_string(),
            None => "Unknown".to_string(),
        };
    } else {
        let resolved = cameras.resolve(&entry.camera).map(str::to_string);
        match resolved {
            Some(canonical) => entry.camera = canonical,
            None => {
                let raw = entry.camera.trim().to_string();
                entry.push_note(&format!("Camera (raw): {raw}"));
                entry.camera = "Unknown".to_string();
            }
        }
    }
}
