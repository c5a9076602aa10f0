//! CLI binary for pdf2txt.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ExtractionConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2txt::{extract, extract_to_file, inspect, ExtractionConfig, ExtractionOutput, SliceOutcome};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Dump the full document text (stdout)
  pdf2txt document.pdf

  # Dump to a file
  pdf2txt document.pdf -o document.txt

  # Keep only the text from the first occurrence of a marker onwards
  pdf2txt questions.pdf -o appendix_questions.txt --marker "Question #A1"

  # Extract from a URL
  pdf2txt https://example.com/paper.pdf -o paper.txt

  # Inspect PDF metadata, no extraction
  pdf2txt --inspect-only document.pdf

  # Structured JSON output (text + outcome + metadata + stats)
  pdf2txt --json document.pdf > run.json

MARKER BEHAVIOUR:
  The marker is matched literally (case-sensitive, first occurrence, no
  regex). When the marker is not found, the last 5000 characters of the
  document are written instead and a notice is printed.

ENVIRONMENT VARIABLES:
  PDF2TXT_OUTPUT            Default for -o/--output
  PDF2TXT_MARKER            Default for -m/--marker
  PDF2TXT_PASSWORD          Default for --password
  PDF2TXT_DOWNLOAD_TIMEOUT  Default for --download-timeout
  PDFIUM_LIB_PATH           Path to an existing libpdfium

SETUP:
  pdfium is loaded at runtime. Install libpdfium system-wide, place the
  platform library in the working directory, or point PDFIUM_LIB_PATH at it.
  Prebuilt binaries: https://github.com/bblanchon/pdfium-binaries
"#;

/// Extract plain text from PDF files and URLs.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2txt",
    version,
    about = "Extract plain text from PDF files and URLs",
    long_about = "Extract the embedded text of a PDF document (local file or URL), pages joined \
with newlines, and write it as UTF-8 — the whole document, or only the part from a literal \
marker substring onwards.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Local PDF file path or HTTP/HTTPS URL.
    input: String,

    /// Write text to this file instead of stdout. Overwritten on each run.
    #[arg(short, long, env = "PDF2TXT_OUTPUT")]
    output: Option<PathBuf>,

    /// Keep only the text from this marker's first occurrence onwards.
    #[arg(
        short,
        long,
        env = "PDF2TXT_MARKER",
        long_help = "Literal substring to anchor the output at (case-sensitive, first \
          occurrence, no regex).\nWhen absent from the document, the last 5000 characters \
          are written instead."
    )]
    marker: Option<String>,

    /// PDF user password for encrypted documents.
    #[arg(long, env = "PDF2TXT_PASSWORD")]
    password: Option<String>,

    /// Output structured JSON (text + outcome + metadata + stats) instead of plain text.
    #[arg(long, env = "PDF2TXT_JSON")]
    json: bool,

    /// Print PDF metadata only, no extraction.
    #[arg(long)]
    inspect_only: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2TXT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the extracted text.
    #[arg(short, long, env = "PDF2TXT_QUIET")]
    quiet: bool,

    /// HTTP download timeout in seconds.
    #[arg(long, env = "PDF2TXT_DOWNLOAD_TIMEOUT", default_value_t = 120)]
    download_timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let meta = inspect(&cli.input).await.context("Failed to inspect PDF")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&meta).context("Failed to serialise metadata")?
            );
        } else {
            println!("File:         {}", cli.input);
            if let Some(ref t) = meta.title {
                println!("Title:        {}", t);
            }
            if let Some(ref a) = meta.author {
                println!("Author:       {}", a);
            }
            if let Some(ref s) = meta.subject {
                println!("Subject:      {}", s);
            }
            println!("Pages:        {}", meta.page_count);
            println!("PDF Version:  {}", meta.pdf_version);
            if let Some(ref p) = meta.producer {
                println!("Producer:     {}", p);
            }
            if let Some(ref c) = meta.creator {
                println!("Creator:      {}", c);
            }
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = ExtractionConfig::builder().download_timeout_secs(cli.download_timeout);
    if let Some(marker) = cli.marker.as_deref() {
        builder = builder.marker(marker);
    }
    if let Some(password) = cli.password.as_deref() {
        builder = builder.password(password);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run extraction ───────────────────────────────────────────────────
    if let Some(ref output_path) = cli.output {
        let result = extract_to_file(&cli.input, output_path, &config)
            .await
            .context("Extraction failed")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result).context("Failed to serialise output")?
            );
        } else if !cli.quiet {
            print_file_status(&cli, output_path, &result);
            eprintln!(
                "{} {}",
                if result.outcome.is_fallback() {
                    cyan("⚠")
                } else {
                    green("✔")
                },
                dim(&format!(
                    "{} pages  {} chars  {}ms",
                    result.stats.page_count,
                    result.stats.output_chars,
                    result.stats.total_duration_ms
                )),
            );
        }
    } else {
        let result = extract(&cli.input, &config)
            .await
            .context("Extraction failed")?;

        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result).context("Failed to serialise output")?
            );
        } else {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(result.text.as_bytes())
                .context("Failed to write to stdout")?;
            // Ensure a trailing newline on stdout.
            if !result.text.ends_with('\n') {
                handle.write_all(b"\n").ok();
            }

            if !cli.quiet {
                if let SliceOutcome::FallbackTail { chars } = result.outcome {
                    eprintln!(
                        "{} Marker {:?} not found in {}; dumped the last {} characters",
                        cyan("⚠"),
                        cli.marker.as_deref().unwrap_or(""),
                        cli.input,
                        chars,
                    );
                }
                eprintln!(
                    "{}",
                    dim(&format!(
                        "{} pages  {} chars  {}ms",
                        result.stats.page_count,
                        result.stats.output_chars,
                        result.stats.total_duration_ms
                    )),
                );
            }
        }
    }

    Ok(())
}

/// One-line status to stdout, matching the outcome of the run.
fn print_file_status(cli: &Cli, output_path: &std::path::Path, result: &ExtractionOutput) {
    match result.outcome {
        SliceOutcome::Full => {
            println!("Extracted to {}", output_path.display());
        }
        SliceOutcome::FromMarker { .. } => {
            println!("Successfully extracted to {}", output_path.display());
        }
        SliceOutcome::FallbackTail { chars } => {
            println!(
                "Marker {:?} not found in {}; wrote last {} characters to {}",
                cli.marker.as_deref().unwrap_or(""),
                cli.input,
                chars,
                output_path.display(),
            );
        }
    }
}
