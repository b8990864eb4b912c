//! Built-in conversion checks, runnable from any installed binary via
//! `rollmd --self-test`. One fixture per catalog dialect generation, each
//! pushed through the full parse-validate-render pipeline.

use anyhow::{Result, bail, ensure};

use rollmd_camera::CameraCatalog;
use rollmd_format::render_entry;
use rollmd_gate::check_entry_count;
use rollmd_parse::parse_document;
use rollmd_types::FilmEntry;

pub(crate) fn run(verbose: u8) -> Result<()> {
    let checks: [(&str, fn() -> Result<()>); 4] = [
        ("old dialect, unstructured", old_unstructured),
        ("old dialect, structured", old_structured),
        ("new dialect, missing fields", new_missing_fields),
        ("new dialect, all fields", new_all_fields),
    ];

    let mut failed = 0usize;
    for (name, check) in checks {
        match check() {
            Ok(()) => {
                if verbose > 0 {
                    eprintln!("ok: {name}");
                }
            }
            Err(err) => {
                failed += 1;
                eprintln!("FAILED: {name}: {err:#}");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} self-test check(s) failed");
    }
    eprintln!("self-test: all checks passed");
    Ok(())
}

fn parse_single(src: &str) -> Result<FilmEntry> {
    let outcome = parse_document(src, &CameraCatalog::default());
    check_entry_count(src, outcome.entries.len())?;
    ensure!(
        outcome.entries.len() == 1,
        "expected one entry, parsed {}",
        outcome.entries.len()
    );
    let mut entries = outcome.entries;
    match entries.pop() {
        Some(entry) => Ok(entry),
        None => bail!("no entry parsed"),
    }
}

fn field(name: &str, actual: &str, expected: &str) -> Result<()> {
    ensure!(
        actual == expected,
        "{name}: expected {expected:?}, got {actual:?}"
    );
    Ok(())
}

fn old_unstructured() -> Result<()> {
    let src = "\
- 1x Fujifilm Fujicolor
    - ISO 200
    - 24 exposure
    - loaded 01/23/23
    - expiration unknown, likely expired
    - ready to get developed as of 2/12/23
";
    let e = parse_single(src)?;
    field("quantity", &e.quantity, "1x")?;
    field("filmstock", &e.filmstock, "Fujifilm Fujicolor")?;
    field("iso", &e.iso, "200")?;
    field("exposures", &e.exposures, "24")?;
    field("loaded_date", &e.loaded_date, "2023-01-23")?;
    field("ready_date", &e.ready_date, "2023-02-12")?;
    field("expiration", &e.expiration, "")?;

    let md = render_entry(&e);
    ensure!(md.contains("- Expiration: None"), "expiration not None");
    ensure!(md.contains("Expiration info:"), "expiration detail lost");
    ensure!(
        md.contains("- Developed Location: Citizens PDX"),
        "lab default missing"
    );
    Ok(())
}

fn old_structured() -> Result<()> {
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
    let e = parse_single(src)?;
    field("iso", &e.iso, "200")?;
    field("exposures", &e.exposures, "36")?;
    field("expiration", &e.expiration, "2025-09-01")?;
    field("loaded_date", &e.loaded_date, "2024-04-04")?;
    field("camera", &e.camera, "Minolta SR-T101 black")?;
    field("lens", &e.lens, "28mm f2.5")?;
    field("shot_location", &e.shot_location, "SE Portland flowers")?;
    field("ready_date", &e.ready_date, "2024-04-11")?;
    field("developed_date", &e.developed_date, "2024-04-17")?;
    field("developed_location", &e.developed_location, "Citizens PDX")?;
    field("roll_num", &e.roll_num, "4726")?;
    Ok(())
}

fn new_missing_fields() -> Result<()> {
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
    let e = parse_single(src)?;
    field("expiration", &e.expiration, "")?;
    ensure!(
        e.notes.contains("Expiration: expiration unknown, likely 2026"),
        "expiration detail lost from notes"
    );
    field("camera", &e.camera, "Nikon N80")?;
    field("developed_date", &e.developed_date, "")?;
    field("roll_num", &e.roll_num, "")?;

    let md = render_entry(&e);
    ensure!(md.contains("- Expiration: None"), "expiration not None");
    ensure!(md.contains("- Developed Date: None"), "developed date not None");
    ensure!(md.contains("- RollNum: None"), "roll number not None");
    Ok(())
}

fn new_all_fields() -> Result<()> {
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
    let e = parse_single(src)?;
    field("quantity", &e.quantity, "1x")?;
    field("filmstock", &e.filmstock, "Lomography Color '92 Sun-kissed")?;
    field("iso", &e.iso, "400")?;
    field("exposures", &e.exposures, "36")?;
    field("expiration", &e.expiration, "2027-07-01")?;
    field("loaded_date", &e.loaded_date, "2021-09-18")?;
    field("camera", &e.camera, "Minolta SR-T101 silver")?;
    field("lens", &e.lens, "58mm f1.4")?;
    ensure!(e.notes.contains("formula 2023"), "notes lost");
    field("subject", &e.subject, "Winston")?;
    field("shot_location", &e.shot_location, "Portland, OR")?;
    field("ready_date", &e.ready_date, "2025-09-19")?;
    field("developed_date", &e.developed_date, "")?;
    Ok(())
}
