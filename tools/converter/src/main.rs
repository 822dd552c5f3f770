//! CLI tool for converting the Warodai Japanese-Russian dictionary to zkanji import format.
//!
//! # Usage
//!
//! ```bash
//! # Convert with default file names (ewarodai.txt -> warodai.zkanji.export)
//! warodai-zkanji
//!
//! # Explicit paths, keep definitions in Cyrillic
//! warodai-zkanji -i ewarodai.txt -o warodai.zkanji.export --translit cyrillic
//!
//! # Verbose diagnostics for every repaired or skipped headword
//! RUST_LOG=debug warodai-zkanji -i ewarodai.txt
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use warodai::prelude::*;
use warodai::reader::encoding_for_label;

/// Convert the Warodai dictionary to a zkanji import file.
///
/// The whole source file is parsed before the output file is created,
/// so a malformed record leaves no partial output behind.
#[derive(Parser, Debug)]
#[command(name = "warodai-zkanji")]
#[command(version, about)]
struct Args {
    /// Warodai source file.
    #[arg(short, long, default_value = "ewarodai.txt")]
    input: PathBuf,

    /// zkanji export file to create.
    #[arg(short, long, default_value = "warodai.zkanji.export")]
    output: PathBuf,

    /// Input encoding label. A byte order mark takes precedence.
    #[arg(long, default_value = "utf-16")]
    encoding: String,

    /// Script used for definitions in the output.
    #[arg(long, value_enum, default_value_t = TranslitArg::Latin)]
    translit: TranslitArg,
}

/// Supported definition scripts for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TranslitArg {
    /// Latin transliteration of Russian (zkanji cannot display Cyrillic).
    Latin,
    /// Keep definitions as they are.
    Cyrillic,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("Failed to open input file: {}", args.input.display()))?;

    let dictionary = parse_dictionary(&bytes, &args.encoding)?;
    eprintln!("Parsed {} record(s)", dictionary.records);

    let stats = write_dictionary(&dictionary.entries, &args.output, args.translit)?;
    eprintln!("Exported {} entry(ies), skipped {}", stats.written, stats.skipped);

    Ok(())
}

/// Decodes the source file and parses every record after the preamble.
fn parse_dictionary(bytes: &[u8], encoding: &str) -> Result<Dictionary> {
    let encoding = encoding_for_label(encoding)?;
    let text = decode(bytes, encoding).context("Failed to decode input")?;

    let mut records = RecordReader::new(text.lines());
    records.skip_preamble();

    // records_read() also counts the preamble
    convert(&mut records).with_context(|| {
        format!("Failed to parse record #{}", records.records_read().saturating_sub(1))
    })
}

/// Creates the output file and writes all entries with the selected script.
fn write_dictionary(entries: &[Entry], path: &Path, translit: TranslitArg) -> Result<ExportStats> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let stats = match translit {
        TranslitArg::Latin => export(entries, file, RussianLatin),
        TranslitArg::Cyrillic => export(entries, file, Identity),
    };
    stats.context("Failed to write output")
}
