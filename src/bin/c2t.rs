//! Textab CLI - generate LaTeX tables from csv files

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use std::process;
#[cfg(feature = "cli")]
use textab::{convert_description, DecimalFormat, RenderOptions, TableError, TableResult};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "c2t")]
#[command(version)]
#[command(about = "Textab - an utility for generating LaTeX tables from csv files", long_about = None)]
struct Cli {
    /// Path to the conversion description
    file: PathBuf,

    /// Path to an output directory. If not passed, output is written to
    /// stdout.
    outpath: Option<PathBuf>,

    /// Encoding of the csv files, if the encoding is not utf-8
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// The csv delimiter char
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// The csv quote char
    #[arg(long, default_value_t = '"')]
    quote_char: char,

    /// Skip the first row of the csv files
    #[arg(long)]
    skip_header: bool,

    /// The locale that is used when converting numerical representations
    #[arg(long, default_value = "de_DE.UTF-8")]
    locale: String,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> TableResult<()> {
    let decimal = DecimalFormat::for_locale(&cli.locale)
        .ok_or_else(|| TableError::config(format!("unsupported locale '{}'", cli.locale)))?;

    let options = RenderOptions {
        encoding: cli.encoding.clone(),
        delimiter: ascii_byte(cli.delimiter, "delimiter")?,
        quote: ascii_byte(cli.quote_char, "quote char")?,
        skip_header: cli.skip_header,
        decimal,
    };

    let rendered = convert_description(&cli.file, &options)?;

    match cli.outpath {
        Some(ref outdir) => {
            fs::create_dir_all(outdir).map_err(|e| {
                TableError::io(format!("failed to create {}: {}", outdir.display(), e))
            })?;

            for table in &rendered {
                let out_path = output_path(outdir, &table.source);
                fs::write(&out_path, &table.content).map_err(|e| {
                    TableError::io(format!("failed to write {}: {}", out_path.display(), e))
                })?;
                eprintln!("✓ Output written to: {}", out_path.display());
            }
        }
        None => {
            for table in &rendered {
                println!("{}", table.content);
            }
        }
    }

    Ok(())
}

/// Output file for one table: the csv's file name with its extension replaced
/// by `.tex`, placed directly inside the output directory. Only the file name
/// is used, so output never escapes the directory for non-trivial workdirs.
#[cfg(feature = "cli")]
fn output_path(outdir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table");
    outdir.join(format!("{}.tex", stem))
}

#[cfg(feature = "cli")]
fn ascii_byte(c: char, what: &str) -> TableResult<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(TableError::config(format!(
            "{} must be a single ASCII character, got '{}'",
            what, c
        )))
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install textab --features cli");
    eprintln!("  c2t [OPTIONS] <FILE> [OUTPATH]");
}
