//! Extraction entry points.
//!
//! One pass per document: resolve the input, read metadata, extract every
//! page, join with newlines, apply the marker/tail policy, and hand back an
//! [`ExtractionOutput`]. No retries, no partial recovery — a source that
//! cannot be read or a destination that cannot be written fails the run
//! (see [`crate::error::Pdf2TxtError::class`] for the failure families).

use crate::config::ExtractionConfig;
use crate::error::Pdf2TxtError;
use crate::output::{DocumentMetadata, ExtractionOutput, ExtractionStats, SliceOutcome};
use crate::pipeline::{input, slice, text};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Extract text from a PDF file or URL.
///
/// This is the primary entry point for the library. With no marker in
/// `config` the result is the full document text, pages joined with `\n`,
/// verbatim. With a marker, the result is the suffix from the marker's
/// first occurrence — or the fallback tail window when the marker is
/// absent (check [`ExtractionOutput::outcome`]).
///
/// # Arguments
/// * `input_str` — Local file path or HTTP/HTTPS URL to a PDF
/// * `config` — Extraction configuration
///
/// # Errors
/// Returns `Err(Pdf2TxtError)` when the source cannot be located,
/// downloaded, opened, or parsed. A missing marker is not an error.
pub async fn extract(
    input_str: impl AsRef<str>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, Pdf2TxtError> {
    let total_start = Instant::now();
    let input_str = input_str.as_ref();
    info!("Starting extraction: {}", input_str);

    // ── Step 1: Resolve input ────────────────────────────────────────────
    let resolved = input::resolve_input(input_str, config.download_timeout_secs).await?;
    let pdf_path = resolved.path().to_path_buf();

    // ── Step 2: Read metadata ────────────────────────────────────────────
    let metadata = text::extract_metadata(&pdf_path, config.password.as_deref()).await?;
    info!("PDF has {} pages", metadata.page_count);

    // ── Step 3: Extract per-page text ────────────────────────────────────
    let extract_start = Instant::now();
    let pages = text::extract_pages(&pdf_path, config.password.as_deref()).await?;
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;

    // ── Step 4: Join pages ───────────────────────────────────────────────
    let page_count = pages.len();
    let content = join_pages(pages);
    let content_chars = content.chars().count();
    debug!(
        "Joined {} pages into {} chars in {}ms",
        page_count, content_chars, extract_duration_ms
    );

    // ── Step 5: Apply output policy ──────────────────────────────────────
    let (kept, outcome) = match config.marker.as_deref() {
        Some(marker) => {
            let (sliced, outcome) = slice::slice_at_marker(&content, marker);
            (sliced.to_owned(), outcome)
        }
        None => (content, SliceOutcome::Full),
    };

    let stats = ExtractionStats {
        page_count: metadata.page_count,
        content_chars,
        output_chars: kept.chars().count(),
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        extract_duration_ms,
    };

    info!(
        "Extraction complete: {} pages, {} chars kept, {}ms total",
        stats.page_count, stats.output_chars, stats.total_duration_ms
    );

    Ok(ExtractionOutput {
        text: kept,
        outcome,
        metadata,
        stats,
    })
}

/// Extract a PDF and write the text directly to a file.
///
/// The destination is overwritten unconditionally with a single plain
/// write — no append, no temp-file-and-rename. The written bytes are the
/// UTF-8 encoding of [`ExtractionOutput::text`]; an invalid destination
/// path or missing permission fails with
/// [`Pdf2TxtError::OutputWriteFailed`].
pub async fn extract_to_file(
    input_str: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, Pdf2TxtError> {
    let output = extract(input_str, config).await?;
    let path = output_path.as_ref();

    tokio::fs::write(path, output.text.as_bytes())
        .await
        .map_err(|e| Pdf2TxtError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Wrote {} bytes to {}", output.text.len(), path.display());
    Ok(output)
}

/// Synchronous wrapper around [`extract`].
///
/// Creates a temporary tokio runtime internally.
pub fn extract_sync(
    input_str: impl AsRef<str>,
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, Pdf2TxtError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Pdf2TxtError::Internal(format!("Failed to create tokio runtime: {}", e)))?
        .block_on(extract(input_str, config))
}

/// Extract text from PDF bytes in memory.
///
/// Avoids the need for the caller to create a temporary file. Internally
/// the library writes `bytes` to a managed [`tempfile`] and cleans it up
/// automatically on return or panic. This is the recommended API when PDF
/// data comes from a database, network stream, or in-memory buffer rather
/// than a file on disk.
pub async fn extract_from_bytes(
    bytes: &[u8],
    config: &ExtractionConfig,
) -> Result<ExtractionOutput, Pdf2TxtError> {
    let mut tmp = tempfile::NamedTempFile::new()
        .map_err(|e| Pdf2TxtError::Internal(format!("tempfile: {e}")))?;
    tmp.write_all(bytes)
        .map_err(|e| Pdf2TxtError::Internal(format!("tempfile write: {e}")))?;
    let path = tmp.path().to_string_lossy().to_string();
    // `tmp` is dropped (and the file deleted) when `extract` returns
    extract(&path, config).await
}

/// Extract PDF metadata without extracting text.
///
/// Does not read page content; useful for a quick look at page count and
/// document info fields.
pub async fn inspect(input_str: impl AsRef<str>) -> Result<DocumentMetadata, Pdf2TxtError> {
    let resolved = input::resolve_input(input_str.as_ref(), 120).await?;
    let pdf_path = resolved.path().to_path_buf();
    text::extract_metadata(&pdf_path, None).await
}

/// Join per-page texts with a newline separator, in page order.
///
/// A zero-page document yields the empty string.
fn join_pages(pages: Vec<String>) -> String {
    pages.join("\n")
}
