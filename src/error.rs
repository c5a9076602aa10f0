//! Error types for the pdf2txt library.
//!
//! Every failure a caller can see is a [`Pdf2TxtError`]. Variants are
//! deliberately fine-grained — "file not found" and "wrong password" call
//! for different operator actions, and the message of each variant says
//! what to do next, not just what went wrong.
//!
//! Callers that don't care about individual variants can branch on
//! [`Pdf2TxtError::class`], which collapses the taxonomy into three
//! families: the source could not be read or parsed, the destination could
//! not be written, or the run never got that far.
//!
//! A marker that is absent from the document is **not** an error — the
//! extractor falls back to the tail window and reports it through
//! [`crate::output::SliceOutcome::FallbackTail`].

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2txt library.
#[derive(Debug, Error)]
pub enum Pdf2TxtError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The input string is not a valid file path or URL.
    #[error("Invalid input '{input}': not a file path or a valid HTTP/HTTPS URL")]
    InvalidInput { input: String },

    /// HTTP URL was syntactically valid but download failed.
    #[error("Failed to download '{url}': {reason}\nCheck your internet connection.")]
    DownloadFailed { url: String, reason: String },

    /// Download exceeded the configured timeout.
    #[error("Download timed out after {secs}s for '{url}'\nIncrease --download-timeout.")]
    DownloadTimeout { url: String, secs: u64 },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// pdfium could not extract the text of a specific page.
    #[error("Text extraction failed for page {page}: {detail}")]
    ExtractionFailed { page: usize, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output text file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
pdf2txt looks for libpdfium in this order:\n\
  1. The path in the PDFIUM_LIB_PATH environment variable.\n\
  2. The current working directory.\n\
  3. The system library search path.\n\
Install libpdfium or set PDFIUM_LIB_PATH=/path/to/libpdfium.\n"
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// The failure family of a [`Pdf2TxtError`].
///
/// Collapses the variant taxonomy into the three questions an operator
/// actually asks: could the source be read, could the destination be
/// written, or did the run never get that far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// The source PDF could not be located, downloaded, opened, or parsed.
    SourceRead,
    /// The destination text file could not be created or written.
    DestWrite,
    /// Configuration or environment problem before any document I/O.
    Setup,
}

impl Pdf2TxtError {
    /// Classify this error into its [`ErrorClass`] family.
    pub fn class(&self) -> ErrorClass {
        match self {
            Pdf2TxtError::FileNotFound { .. }
            | Pdf2TxtError::PermissionDenied { .. }
            | Pdf2TxtError::InvalidInput { .. }
            | Pdf2TxtError::DownloadFailed { .. }
            | Pdf2TxtError::DownloadTimeout { .. }
            | Pdf2TxtError::NotAPdf { .. }
            | Pdf2TxtError::CorruptPdf { .. }
            | Pdf2TxtError::PasswordRequired { .. }
            | Pdf2TxtError::WrongPassword { .. }
            | Pdf2TxtError::ExtractionFailed { .. } => ErrorClass::SourceRead,
            Pdf2TxtError::OutputWriteFailed { .. } => ErrorClass::DestWrite,
            Pdf2TxtError::InvalidConfig(_)
            | Pdf2TxtError::PdfiumBindingFailed(_)
            | Pdf2TxtError::Internal(_) => ErrorClass::Setup,
        }
    }
}
