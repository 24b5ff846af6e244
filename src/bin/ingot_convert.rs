//! ingot-convert: Convert a CSV file into a JSON array of typed objects
//!
//! Field values are typed as they are written: numbers, booleans
//! (true/false/yes/no) and nulls (null/none) become native JSON values,
//! everything else stays a string.
//!
//! Usage:
//!   # Writes data.json next to the input, indented by 4 spaces
//!   ingot-convert data.csv
//!
//!   # Compact single-line output to a chosen path
//!   ingot-convert data.csv -o out/data.json --indent 0
//!
//!   # Semicolon-separated input, with debug logging
//!   RUST_LOG=ingot=debug ingot-convert --delimiter ';' export.csv

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ingot::{convert_file, ConvertConfig};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ingot-convert")]
#[command(about = "Convert CSV to JSON", long_about = None)]
struct Args {
    /// Path to the input CSV file
    #[arg(value_name = "INPUT_CSV")]
    input: PathBuf,

    /// Path to the output JSON file (default: input path with a .json extension)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Indentation level for JSON output (0 = compact)
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Field delimiter of the input (single ASCII character)
    #[arg(long, short = 'd', default_value_t = ',')]
    delimiter: char,
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let delimiter = delimiter_byte(args.delimiter)?;
    let output = match args.output {
        Some(path) => path,
        None => default_output_path(&args.input),
    };
    if output == args.input {
        bail!(
            "Output path {} is the same as the input; pass --output",
            output.display()
        );
    }

    let config = ConvertConfig::default()
        .with_indent(args.indent)
        .with_delimiter(delimiter);

    let report = convert_file(&args.input, &output, &config)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    println!(
        "Successfully converted {} to {}",
        report.input.display(),
        report.output.display()
    );
    println!("Total records converted: {}", report.records);

    Ok(())
}

/// Log to stderr, `info` unless `RUST_LOG` says otherwise
fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {delimiter:?}");
    }
    Ok(delimiter as u8)
}
