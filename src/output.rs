//! Output types: extracted text, slice outcome, document metadata, stats.
//!
//! Everything here is plain data with serde derives so the CLI's `--json`
//! mode can emit a run verbatim and two runs can be diffed to understand
//! why their outputs differ.

use serde::{Deserialize, Serialize};

/// The result of one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutput {
    /// The extracted text — the full joined document, the suffix from the
    /// marker, or the fallback tail, depending on [`ExtractionOutput::outcome`].
    pub text: String,

    /// Which output policy applied to this run.
    pub outcome: SliceOutcome,

    /// Document metadata read from the PDF.
    pub metadata: DocumentMetadata,

    /// Page and timing statistics.
    pub stats: ExtractionStats,
}

/// Which output policy produced the text of an extraction run.
///
/// A single linear decision, not a state machine: with no marker configured
/// the full document is kept; with a marker it is either found (suffix) or
/// absent (fixed-size tail window).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum SliceOutcome {
    /// No marker was configured; the full joined document text was kept.
    Full,
    /// The marker was found; the text is the suffix of the document
    /// starting at the first occurrence. `offset` is the byte offset of
    /// that occurrence in the joined content.
    FromMarker { offset: usize },
    /// The marker was absent; the text is the final tail window of the
    /// document. `chars` is the character count actually written — equal
    /// to the window size, or less when the document is shorter.
    FallbackTail { chars: usize },
}

impl SliceOutcome {
    /// True when the marker was configured but not found.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SliceOutcome::FallbackTail { .. })
    }
}

/// Document metadata extracted from the PDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title from PDF metadata.
    pub title: Option<String>,
    /// Document author.
    pub author: Option<String>,
    /// Document subject.
    pub subject: Option<String>,
    /// Application that created the original document.
    pub creator: Option<String>,
    /// Application that produced the PDF.
    pub producer: Option<String>,
    /// Creation date (PDF date string, as stored).
    pub creation_date: Option<String>,
    /// Last modification date (PDF date string, as stored).
    pub modification_date: Option<String>,
    /// Total number of pages in the document.
    pub page_count: usize,
    /// PDF specification version.
    pub pdf_version: String,
    /// Whether the document was opened with a password.
    pub is_encrypted: bool,
}

/// Statistics for one extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of pages in the document (all pages are extracted).
    pub page_count: usize,
    /// Character count of the full joined content before slicing.
    pub content_chars: usize,
    /// Character count of the text actually kept after slicing.
    pub output_chars: usize,
    /// Wall-clock time for the whole run in milliseconds.
    pub total_duration_ms: u64,
    /// Wall-clock time spent inside pdfium text extraction in milliseconds.
    pub extract_duration_ms: u64,
}
