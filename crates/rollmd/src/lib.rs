//! # rollmd
//!
//! **CLI Binary**
//!
//! This is the entry point for the `rollmd` command-line application.
//! It orchestrates the other crates to convert a film catalog file.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Read the input catalog and write the converted output
//! * Report parse warnings and validation failures
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod error_hints;
mod self_test;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};

use rollmd_camera::CameraCatalog;
use rollmd_format::render_document;
use rollmd_gate::check_entry_count;
use rollmd_parse::parse_document;

#[derive(Parser, Debug)]
#[command(
    name = "rollmd",
    version,
    about = "Convert mixed-dialect film catalog markdown into the canonical schema."
)]
pub struct Cli {
    /// Input markdown catalog.
    #[arg(short, long, value_name = "FILE", required_unless_present = "self_test")]
    pub input: Option<PathBuf>,

    /// Where to write the converted catalog.
    #[arg(short, long, value_name = "FILE", required_unless_present = "self_test")]
    pub output: Option<PathBuf>,

    /// Print conversion progress to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Run the built-in conversion checks and exit.
    #[arg(long)]
    pub self_test: bool,
}

/// Entry point used by the `rollmd` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.self_test {
        return self_test::run(cli.verbose);
    }

    // clap enforces both paths when --self-test is absent.
    let input = cli.input.as_deref().context("missing --input path")?;
    let output = cli.output.as_deref().context("missing --output path")?;
    convert(input, output, cli.verbose)
}

/// Convert one catalog file: parse, validate, render, write.
///
/// Output is rendered in full before anything touches the filesystem, and
/// the validation gate runs first, so a failed conversion never leaves a
/// partial file behind.
pub fn convert(input: &Path, output: &Path, verbose: u8) -> Result<()> {
    if !input.is_file() {
        bail!("input path does not exist: {}", input.display());
    }
    let content = fs::read_to_string(input)
        .with_context(|| format!("reading input file {}", input.display()))?;

    let cameras = CameraCatalog::default();
    let outcome = parse_document(&content, &cameras);

    for warning in &outcome.warnings {
        eprintln!("warning: line {}: {}", warning.line, warning.message);
    }
    if verbose > 0 {
        eprintln!(
            "parsed {} entries ({} warnings)",
            outcome.entries.len(),
            outcome.warnings.len()
        );
    }

    check_entry_count(&content, outcome.entries.len())
        .with_context(|| format!("validating conversion of {}", input.display()))?;

    let rendered = render_document(&outcome.entries);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(output, rendered)
        .with_context(|| format!("writing output file {}", output.display()))?;

    if verbose > 0 {
        eprintln!(
            "converted {} entries to {}",
            outcome.entries.len(),
            output.display()
        );
    }
    Ok(())
}

/// Render an error (with hints) for terminal display.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
