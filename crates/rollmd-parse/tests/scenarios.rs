//! End-to-end parse scenarios over real catalog excerpts, one per dialect
//! generation observed in the source logs.

use rollmd_camera::CameraCatalog;
use rollmd_parse::parse_document;

#[test]
fn old_unstructured_block() {
    let src = "\
- 1x Fujifilm Fujicolor
    - ISO 200
    - 24 exposure
    - loaded 01/23/23
    - expiration unknown, likely expired
    - ready to get developed as of 2/12/23
";
    let out = parse_document(src, &CameraCatalog::default());
    assert_eq!(out.entries.len(), 1);
    assert!(out.warnings.is_empty());

    let e = &out.entries[0];
    assert_eq!(e.quantity, "1x");
    assert_eq!(e.filmstock, "Fujifilm Fujicolor");
    assert_eq!(e.iso, "200");
    assert_eq!(e.exposures, "24");
    assert_eq!(e.loaded_date, "2023-01-23");
    assert_eq!(e.ready_date, "2023-02-12");
    // Undetermined expiration stays empty; the detail survives in notes.
    assert_eq!(e.expiration, "");
    assert!(e.notes.contains("Expiration info:"));
    assert_eq!(e.camera, "Unknown");
}

#[test]
fn old_structured_block() {
    let src = "\
- 1x Kodak Color Plus
    - ISO 200
    - 36 exposures
    - expires 09/2025
    - loaded on 4/4/24
    - shot in black Minolta SR-T101 with 28mm f2.5 around SE Portland flowers
    - ready for development as of 4/11/24
    - developed 4/17/24 at Citizens PDX
    - roll 4726
";
    let out = parse_document(src, &CameraCatalog::default());
    assert_eq!(out.entries.len(), 1);

    let e = &out.entries[0];
    assert_eq!(e.iso, "200");
    assert_eq!(e.exposures, "36");
    assert_eq!(e.expiration, "2025-09-01");
    assert_eq!(e.loaded_date, "2024-04-04");
    assert_eq!(e.camera, "Minolta SR-T101 black");
    assert_eq!(e.lens, "28mm f2.5");
    assert_eq!(e.shot_location, "SE Portland flowers");
    assert_eq!(e.ready_date, "2024-04-11");
    assert_eq!(e.developed_date, "2024-04-17");
    assert_eq!(e.developed_location, "Citizens PDX");
    assert_eq!(e.roll_num, "4726");
}

#[test]
fn new_block_with_missing_fields() {
    let src = "\
- Filmstock: 1x Kodak Professional ProImage
    - ISO: 100
    - Exposures: 36
    - Expiration: expiration unknown, likely 2026
    - Loaded Date: 07/31/25
    - Camera: Nikon N80
    - Lens: 50mm f1.8
    - Shot Location: Inner SE Portland
    - Ready for Development Date: 08/02/25
    - Developed Date:
    - Developed Location: Citizens PDX
    - RollNum:
";
    let out = parse_document(src, &CameraCatalog::default());
    assert_eq!(out.entries.len(), 1);

    let e = &out.entries[0];
    assert_eq!(e.expiration, "");
    assert!(e.notes.contains("Expiration: expiration unknown, likely 2026"));
    assert_eq!(e.loaded_date, "2025-07-31");
    assert_eq!(e.camera, "Nikon N80");
    assert_eq!(e.lens, "50mm f1.8");
    assert_eq!(e.ready_date, "2025-08-02");
    assert_eq!(e.developed_date, "");
    assert_eq!(e.developed_location, "Citizens PDX");
    assert_eq!(e.roll_num, "");
}

#[test]
fn new_block_with_all_fields() {
    let src = "\
- Filmstock 1x Lomography Color '92 Sun-kissed:
    - ISO: 400
    - Exposures: 36
    - Expiration: 07/2027
    - Loaded Date: 09/18/21
    - Camera: Minolta SR-T101 silver
    - Lens: 58mm f1.4
    - Filter: None
    - Notes: formula 2023
    - Subject: Winston
    - Shot Location: Portland, OR
    - Ready for Development Date: 09/19/25
    - Developed Date:
    - Developed Location: Citizens PDX
    - RollNum:
";
    let out = parse_document(src, &CameraCatalog::default());
    assert_eq!(out.entries.len(), 1);

    let e = &out.entries[0];
    assert_eq!(e.quantity, "1x");
    assert_eq!(e.filmstock, "Lomography Color '92 Sun-kissed");
    assert_eq!(e.iso, "400");
    assert_eq!(e.exposures, "36");
    assert_eq!(e.expiration, "2027-07-01");
    assert_eq!(e.loaded_date, "2021-09-18");
    assert_eq!(e.camera, "Minolta SR-T101 silver");
    assert_eq!(e.lens, "58mm f1.4");
    assert_eq!(e.filter, "None");
    assert!(e.notes.contains("formula 2023"));
    assert_eq!(e.subject, "Winston");
    assert_eq!(e.shot_location, "Portland, OR");
    assert_eq!(e.ready_date, "2025-09-19");
    assert_eq!(e.developed_date, "");
    assert_eq!(e.developed_location, "Citizens PDX");
}

#[test]
fn mixed_dialects_keep_document_order() {
    let src = "\
- 1x Kodak Gold
    - ISO 200

- Filmstock: 1x Fuji Superia
    - ISO: 400

- 2x Ilford HP5
    - ISO 400
";
    let out = parse_document(src, &CameraCatalog::default());
    let names: Vec<&str> = out.entries.iter().map(|e| e.filmstock.as_str()).collect();
    assert_eq!(names, ["Kodak Gold", "Fuji Superia", "Ilford HP5"]);
}

#[test]
fn finalizer_runs_on_every_entry() {
    // Both entries carry raw camera text; both come out canonical.
    let src = "\
- 1x Kodak Gold
    - shot on the x700

- 1x Fuji Superia
    - Camera not recorded anywhere useful
";
    let out = parse_document(src, &CameraCatalog::default());
    assert_eq!(out.entries[0].camera, "Minolta X-700");
    assert_eq!(out.entries[1].camera, "Unknown");
}

#[test]
fn location_filed_as_camera_is_untangled() {
    let src = "\
- Filmstock: 1x Kodak Gold
    - Camera: at the Oregon coast
";
    let out = parse_document(src, &CameraCatalog::default());
    let e = &out.entries[0];
    assert_eq!(e.camera, "Unknown");
    assert_eq!(e.shot_location, "at the Oregon coast");
    assert!(e.notes.contains("Camera (raw -> location): at the Oregon coast"));
}

#[test]
fn camera_filed_as_lens_is_untangled() {
    let src = "\
- Filmstock: 1x Kodak Gold
    - Lens: Halina 35X
";
    let out = parse_document(src, &CameraCatalog::default());
    let e = &out.entries[0];
    assert_eq!(e.camera, "Halina 35X");
    assert_eq!(e.lens, "");
    assert!(e.notes.contains("Lens (raw contained camera): Halina 35X"));
}
