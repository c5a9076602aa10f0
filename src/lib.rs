//! # pdf2txt
//!
//! Extract plain text from PDF documents — full dumps or marker-anchored
//! slices.
//!
//! ## Why this crate?
//!
//! A recurring chore: pull the embedded text out of a PDF (an exam paper,
//! an appendix, a report) and keep only the part after some known heading.
//! This crate does exactly that and nothing more. All PDF parsing — layout
//! analysis, text extraction, encoding handling — is delegated to pdfium
//! via the `pdfium-render` crate; what remains is file I/O and a substring
//! search, done carefully: validated inputs, a real error taxonomy, and
//! char-boundary-safe slicing.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    resolve local file or download from URL
//!  ├─ 2. Text     per-page extraction via pdfium (CPU-bound, spawn_blocking)
//!  ├─ 3. Join     concatenate pages with "\n", in page order
//!  ├─ 4. Slice    marker suffix, fallback tail window, or full document
//!  └─ 5. Output   UTF-8 text + metadata + stats
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2txt::{extract, ExtractionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Full-document dump: pages joined with "\n", verbatim.
//!     let output = extract("document.pdf", &ExtractionConfig::default()).await?;
//!     println!("{}", output.text);
//!
//!     // Marker-anchored slice: keep the suffix from the first occurrence.
//!     let config = ExtractionConfig::builder().marker("Question #A1").build()?;
//!     let sliced = extract("document.pdf", &config).await?;
//!     eprintln!("outcome: {:?}", sliced.outcome);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2txt` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! pdf2txt = { version = "0.1", default-features = false }
//! ```
//!
//! ## Runtime requirement
//!
//! pdfium is loaded dynamically at runtime: set `PDFIUM_LIB_PATH`, drop the
//! platform library into the working directory, or install it system-wide.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use error::{ErrorClass, Pdf2TxtError};
pub use extract::{extract, extract_from_bytes, extract_sync, extract_to_file, inspect};
pub use output::{DocumentMetadata, ExtractionOutput, ExtractionStats, SliceOutcome};
pub use pipeline::slice::FALLBACK_TAIL_CHARS;
